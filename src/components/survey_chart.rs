use std::error::Error;

use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::sections::data::SurveyItem;

const BAR: RGBColor = RGBColor(45, 90, 39);
const BAR_LOW: RGBColor = RGBColor(192, 57, 43);
const WIDTH: u32 = 900;
const HEIGHT: u32 = 360;

#[derive(Properties, PartialEq)]
pub struct SurveyChartProps {
    pub items: &'static [SurveyItem],
}

fn draw(canvas: HtmlCanvasElement, items: &[SurveyItem]) -> Result<(), Box<dyn Error>> {
    canvas.set_width(WIDTH);
    canvas.set_height(HEIGHT);

    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .caption("问卷关键指标", ("sans-serif", 20))
        .x_label_area_size(36)
        .y_label_area_size(48)
        .build_cartesian_2d(0..items.len(), 0.0..100.0)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(items.len())
        .x_label_formatter(&|x| items.get(*x).map(|item| item.short.to_string()).unwrap_or_default())
        .y_label_formatter(&|y| format!("{:.0}%", y))
        .draw()?;

    chart.draw_series(items.iter().enumerate().map(|(i, item)| {
        let color = if item.is_low { BAR_LOW } else { BAR };
        let mut bar = Rectangle::new([(i, 0.0), (i + 1, item.percentage)], color.filled());
        bar.set_margin(0, 0, 8, 8);
        bar
    }))?;

    root.present()?;
    Ok(())
}

/// Bar chart of every survey percentage, drawn once the canvas mounts.
#[function_component(SurveyChart)]
pub fn survey_chart(props: &SurveyChartProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let items = props.items;
        use_effect_with_deps(
            move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Err(e) = draw(canvas, items) {
                        log::warn!("Failed to draw survey chart: {}", e);
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="survey-chart card">
            <canvas
                ref={canvas_ref}
                width={WIDTH.to_string()}
                height={HEIGHT.to_string()}
                style="width: 100%; height: auto;"
            />
        </div>
    }
}
