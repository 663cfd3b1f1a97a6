use std::fmt::Debug;

use log::{debug, warn};
use wasm_bindgen::JsValue;

/// Something that can stop the page behind an overlay from scrolling.
pub trait ScrollLockHost {
    type Error: Debug;

    fn acquire(&self) -> Result<(), Self::Error>;
    fn release(&self) -> Result<(), Self::Error>;
}

/// Holds the page scroll lock for as long as it lives.
pub struct ScrollLockGuard<H: ScrollLockHost> {
    host: H,
}

impl<H: ScrollLockHost> ScrollLockGuard<H> {
    pub fn acquire(host: H) -> Self {
        if let Err(e) = host.acquire() {
            warn!("Failed to lock page scroll: {:?}", e);
        }
        Self { host }
    }
}

impl<H: ScrollLockHost> Drop for ScrollLockGuard<H> {
    fn drop(&mut self) {
        if let Err(e) = self.host.release() {
            warn!("Failed to release page scroll lock: {:?}", e);
        }
    }
}

/// Locks scrolling by hiding overflow on `<body>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyScrollLock;

impl BodyScrollLock {
    fn set_overflow(value: Option<&str>) -> Result<(), JsValue> {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        let style = body.style();
        match value {
            Some(value) => style.set_property("overflow", value),
            None => style.remove_property("overflow").map(|_| ()),
        }
    }
}

impl ScrollLockHost for BodyScrollLock {
    type Error = JsValue;

    fn acquire(&self) -> Result<(), JsValue> {
        debug!("Locking page scroll");
        Self::set_overflow(Some("hidden"))
    }

    fn release(&self) -> Result<(), JsValue> {
        debug!("Releasing page scroll");
        Self::set_overflow(None)
    }
}

#[cfg(test)]
pub mod testing {
    use super::ScrollLockHost;
    use std::cell::Cell;
    use std::convert::Infallible;
    use std::rc::Rc;

    /// Counts live holders and every acquire/release call.
    #[derive(Clone, Default)]
    pub struct CountingLock {
        pub holders: Rc<Cell<i32>>,
        pub acquired: Rc<Cell<u32>>,
        pub released: Rc<Cell<u32>>,
    }

    impl ScrollLockHost for CountingLock {
        type Error = Infallible;

        fn acquire(&self) -> Result<(), Infallible> {
            self.holders.set(self.holders.get() + 1);
            self.acquired.set(self.acquired.get() + 1);
            Ok(())
        }

        fn release(&self) -> Result<(), Infallible> {
            self.holders.set(self.holders.get() - 1);
            self.released.set(self.released.get() + 1);
            Ok(())
        }
    }

    /// A host whose style writes always fail.
    #[derive(Clone, Default)]
    pub struct BrokenLock {
        pub attempts: Rc<Cell<u32>>,
    }

    impl ScrollLockHost for BrokenLock {
        type Error = &'static str;

        fn acquire(&self) -> Result<(), &'static str> {
            self.attempts.set(self.attempts.get() + 1);
            Err("style is read-only")
        }

        fn release(&self) -> Result<(), &'static str> {
            self.attempts.set(self.attempts.get() + 1);
            Err("style is read-only")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{BrokenLock, CountingLock};
    use super::*;

    #[test]
    fn guard_releases_on_drop() {
        let lock = CountingLock::default();
        let guard = ScrollLockGuard::acquire(lock.clone());
        assert_eq!(lock.holders.get(), 1);
        drop(guard);
        assert_eq!(lock.holders.get(), 0);
        assert_eq!(lock.released.get(), 1);
    }

    #[test]
    fn failed_style_writes_do_not_poison_the_guard() {
        let lock = BrokenLock::default();
        let guard = ScrollLockGuard::acquire(lock.clone());
        assert_eq!(lock.attempts.get(), 1);
        drop(guard);
        assert_eq!(lock.attempts.get(), 2);
    }
}
