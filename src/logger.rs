//! Explicit, caller-owned logger.
//!
//! Messages are written bare (no level prefix or timestamp). Debug messages
//! are dropped unless the logger was built with debug enabled.

use std::error::Error;
use std::fmt::Arguments;
use std::io::{self, Write};

pub struct Logger {
    debug: bool,
    sink: Box<dyn Write>,
}

impl Logger {
    pub fn new(debug: bool, sink: Box<dyn Write>) -> Self {
        Self { debug, sink }
    }

    pub fn stderr(debug: bool) -> Self {
        Self::new(debug, Box::new(io::stderr()))
    }

    pub fn debug(&mut self, args: Arguments<'_>) {
        if self.debug {
            self.write(args);
        }
    }

    pub fn info(&mut self, args: Arguments<'_>) {
        self.write(args);
    }

    pub fn error(&mut self, args: Arguments<'_>) {
        self.write(args);
    }

    /// Log an error followed by every error in its `source()` chain.
    pub fn exception(&mut self, err: &dyn Error) {
        self.write(format_args!("{}", err));
        let mut source = err.source();
        while let Some(cause) = source {
            self.write(format_args!("  caused by: {}", cause));
            source = cause.source();
        }
    }

    /// Flush and drop the sink. Call on every exit path.
    pub fn finish(mut self) {
        let _ = self.sink.flush();
    }

    fn write(&mut self, args: Arguments<'_>) {
        // Nowhere left to report a failing log sink.
        let _ = writeln!(self.sink, "{}", args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Shared(Rc<RefCell<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Shared {
        fn text(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    #[test]
    fn debug_is_silent_unless_enabled() {
        let buf = Shared::default();
        let mut logger = Logger::new(false, Box::new(buf.clone()));
        logger.debug(format_args!("hidden"));
        logger.info(format_args!("shown"));
        logger.finish();
        assert_eq!(buf.text(), "shown\n");

        let buf = Shared::default();
        let mut logger = Logger::new(true, Box::new(buf.clone()));
        logger.debug(format_args!("details {}", 3));
        logger.finish();
        assert_eq!(buf.text(), "details 3\n");
    }

    #[test]
    fn exception_prints_the_source_chain() {
        let buf = Shared::default();
        let mut logger = Logger::new(false, Box::new(buf.clone()));
        let err = crate::error::WordsError::io(
            "reading words file",
            "/tmp/words",
            io::Error::new(io::ErrorKind::Other, "disk on fire"),
        );
        logger.exception(&err);
        logger.finish();
        assert_eq!(
            buf.text(),
            "error reading words file '/tmp/words'\n  caused by: disk on fire\n"
        );
    }
}
