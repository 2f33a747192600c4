// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host capability a snap view drives.

/// A scrollbar-like control plus the layout refresh it depends on.
///
/// The value is a normalized scroll position in `[0, 1]`. Many toolkits resolve
/// a normalized value against the content size computed by the last layout
/// pass, so [`SnapScrollView`](crate::SnapScrollView) brackets every write with
/// [`force_layout`](Self::force_layout): once so the write lands on current
/// metrics, and once so it shows up in the same frame.
///
/// Hosts without that constraint can leave `force_layout` as the default no-op.
/// A bare `f64` is a complete host with no layout.
pub trait ScrollHost {
    /// Current normalized scroll position.
    fn value(&self) -> f64;

    /// Set the normalized scroll position.
    fn set_value(&mut self, value: f64);

    /// Bring layout up to date before or after a write.
    fn force_layout(&mut self) {}
}

impl<H: ScrollHost + ?Sized> ScrollHost for &mut H {
    fn value(&self) -> f64 {
        (**self).value()
    }

    fn set_value(&mut self, value: f64) {
        (**self).set_value(value);
    }

    fn force_layout(&mut self) {
        (**self).force_layout();
    }
}

impl ScrollHost for f64 {
    fn value(&self) -> f64 {
        *self
    }

    fn set_value(&mut self, value: f64) {
        *self = value;
    }
}

/// Write `value` to `host` between two layout refreshes.
pub(crate) fn write_fresh<H: ScrollHost + ?Sized>(host: &mut H, value: f64) {
    host.force_layout();
    host.set_value(value);
    host.force_layout();
}

#[cfg(test)]
mod tests {
    use super::{ScrollHost, write_fresh};

    #[derive(Default)]
    struct Log {
        value: f64,
        calls: [Option<&'static str>; 4],
        len: usize,
    }

    impl Log {
        fn push(&mut self, call: &'static str) {
            self.calls[self.len] = Some(call);
            self.len += 1;
        }
    }

    impl ScrollHost for Log {
        fn value(&self) -> f64 {
            self.value
        }

        fn set_value(&mut self, value: f64) {
            self.value = value;
            self.push("set");
        }

        fn force_layout(&mut self) {
            self.push("layout");
        }
    }

    #[test]
    fn writes_are_bracketed_by_layout() {
        let mut host = Log::default();
        write_fresh(&mut host, 0.5);
        assert_eq!(host.value, 0.5);
        assert_eq!(
            host.calls,
            [Some("layout"), Some("set"), Some("layout"), None]
        );
    }

    #[test]
    fn plain_value_is_a_host() {
        let mut value = 0.25_f64;
        write_fresh(&mut value, 0.75);
        assert_eq!(value.value(), 0.75);
    }

    #[test]
    fn mutable_references_forward() {
        let mut host = Log::default();
        {
            let mut borrowed = &mut host;
            write_fresh(&mut borrowed, 1.0);
        }
        assert_eq!(host.value, 1.0);
        assert_eq!(host.len, 3);
    }
}
