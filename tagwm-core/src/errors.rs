use thiserror::Error;

pub type Result<T> = std::result::Result<T, TagwmError>;

#[derive(Debug, Error)]
pub enum TagwmError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Cannot open display")]
    NoDisplay,
    #[error("Another window manager is already running")]
    AnotherWmRunning,
    #[error("Unexpected display server error: {0}")]
    Transport(TransportError),
}

mod request {
    pub const CONFIGURE_WINDOW: u8 = 12;
    pub const GRAB_BUTTON: u8 = 28;
    pub const GRAB_KEY: u8 = 33;
    pub const SET_INPUT_FOCUS: u8 = 42;
    pub const COPY_AREA: u8 = 62;
    pub const POLY_SEGMENT: u8 = 66;
    pub const POLY_FILL_RECTANGLE: u8 = 70;
    pub const POLY_TEXT8: u8 = 74;
}

mod code {
    pub const BAD_WINDOW: u8 = 3;
    pub const BAD_MATCH: u8 = 8;
    pub const BAD_DRAWABLE: u8 = 9;
    pub const BAD_ACCESS: u8 = 10;
}

/// An asynchronous error the display server reported for one of our requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("request code {request_code}, error code {error_code}")]
pub struct TransportError {
    pub request_code: u8,
    pub error_code: u8,
}

impl TransportError {
    /// Errors caused by windows that vanished before a request reached them.
    /// These are expected and ignored; anything else is fatal.
    #[must_use]
    pub const fn is_benign(&self) -> bool {
        if self.error_code == code::BAD_WINDOW {
            return true;
        }
        matches!(
            (self.request_code, self.error_code),
            (request::SET_INPUT_FOCUS, code::BAD_MATCH)
                | (request::CONFIGURE_WINDOW, code::BAD_MATCH)
                | (request::GRAB_BUTTON | request::GRAB_KEY, code::BAD_ACCESS)
                | (
                    request::POLY_TEXT8
                        | request::POLY_FILL_RECTANGLE
                        | request::POLY_SEGMENT
                        | request::COPY_AREA,
                    code::BAD_DRAWABLE
                )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(request_code: u8, error_code: u8) -> TransportError {
        TransportError {
            request_code,
            error_code,
        }
    }

    #[test]
    fn vanished_windows_are_benign() {
        assert!(error(request::CONFIGURE_WINDOW, code::BAD_WINDOW).is_benign());
        assert!(error(1, code::BAD_WINDOW).is_benign());
        assert!(error(request::SET_INPUT_FOCUS, code::BAD_MATCH).is_benign());
        assert!(error(request::GRAB_KEY, code::BAD_ACCESS).is_benign());
        assert!(error(request::COPY_AREA, code::BAD_DRAWABLE).is_benign());
    }

    #[test]
    fn other_errors_are_fatal() {
        assert!(!error(request::SET_INPUT_FOCUS, code::BAD_ACCESS).is_benign());
        assert!(!error(request::GRAB_KEY, code::BAD_MATCH).is_benign());
        assert!(!error(1, 2).is_benign());
    }
}
