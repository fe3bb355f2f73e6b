//! HTTP status registry
//!
//! Process-wide read-only table of documented 4xx/5xx status codes and their
//! reason phrases, plus the closed [`StatusKind`] classification. The table is
//! fixed at compile time and never mutated.

/// Reason phrase for a registered error status code.
///
/// Returns `None` for codes outside the registry (including all 1xx-3xx
/// codes, which never reach classification).
#[must_use]
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    let phrase = match code {
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Resource Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Request Entity Too Large",
        414 => "Request-URI Too Long",
        415 => "Unsupported Media Type",
        416 => "Requested Range Not Satisfiable",
        417 => "Expectation Failed",
        418 => "I'm A Teapot", // RFC 2324
        421 => "Too Many Connections From This IP",
        422 => "Unprocessable Entity", // WebDAV
        423 => "Locked",              // WebDAV
        424 => "Failed Dependency",   // WebDAV
        425 => "Unordered Collection", // WebDAV
        426 => "Upgrade Required",
        428 => "Precondition Required", // RFC 6585
        429 => "Too Many Requests",     // RFC 6585
        431 => "Request Header Fields Too Large", // RFC 6585
        449 => "Retry With",                      // Microsoft
        450 => "Blocked By Windows Parental Controls", // Microsoft
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version Not Supported",
        506 => "Variant Also Negotiates",
        507 => "Insufficient Storage", // WebDAV
        509 => "Bandwidth Limit Exceeded", // Apache
        510 => "Not Extended",
        511 => "Network Authentication Required", // RFC 6585
        _ => return None,
    };
    Some(phrase)
}

/// One named kind per registered error status, plus a fallback for everything
/// the registry does not know.
///
/// Callers can match on a specific kind or handle any status error uniformly
/// through [`StatusError`](crate::StatusError); the kind never carries data of
/// its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum StatusKind {
    BadRequest,
    Unauthorized,
    PaymentRequired,
    Forbidden,
    ResourceNotFound,
    MethodNotAllowed,
    NotAcceptable,
    ProxyAuthenticationRequired,
    RequestTimeout,
    Conflict,
    Gone,
    LengthRequired,
    PreconditionFailed,
    RequestEntityTooLarge,
    RequestUriTooLong,
    UnsupportedMediaType,
    RequestedRangeNotSatisfiable,
    ExpectationFailed,
    ImATeapot,
    TooManyConnectionsFromThisIp,
    UnprocessableEntity,
    Locked,
    FailedDependency,
    UnorderedCollection,
    UpgradeRequired,
    PreconditionRequired,
    TooManyRequests,
    RequestHeaderFieldsTooLarge,
    RetryWith,
    BlockedByWindowsParentalControls,
    InternalServerError,
    NotImplemented,
    BadGateway,
    ServiceUnavailable,
    GatewayTimeout,
    HttpVersionNotSupported,
    VariantAlsoNegotiates,
    InsufficientStorage,
    BandwidthLimitExceeded,
    NotExtended,
    NetworkAuthenticationRequired,
    /// A status code outside the registry.
    Unregistered,
}

impl StatusKind {
    /// Classify a numeric status code.
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        match code {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            402 => Self::PaymentRequired,
            403 => Self::Forbidden,
            404 => Self::ResourceNotFound,
            405 => Self::MethodNotAllowed,
            406 => Self::NotAcceptable,
            407 => Self::ProxyAuthenticationRequired,
            408 => Self::RequestTimeout,
            409 => Self::Conflict,
            410 => Self::Gone,
            411 => Self::LengthRequired,
            412 => Self::PreconditionFailed,
            413 => Self::RequestEntityTooLarge,
            414 => Self::RequestUriTooLong,
            415 => Self::UnsupportedMediaType,
            416 => Self::RequestedRangeNotSatisfiable,
            417 => Self::ExpectationFailed,
            418 => Self::ImATeapot,
            421 => Self::TooManyConnectionsFromThisIp,
            422 => Self::UnprocessableEntity,
            423 => Self::Locked,
            424 => Self::FailedDependency,
            425 => Self::UnorderedCollection,
            426 => Self::UpgradeRequired,
            428 => Self::PreconditionRequired,
            429 => Self::TooManyRequests,
            431 => Self::RequestHeaderFieldsTooLarge,
            449 => Self::RetryWith,
            450 => Self::BlockedByWindowsParentalControls,
            500 => Self::InternalServerError,
            501 => Self::NotImplemented,
            502 => Self::BadGateway,
            503 => Self::ServiceUnavailable,
            504 => Self::GatewayTimeout,
            505 => Self::HttpVersionNotSupported,
            506 => Self::VariantAlsoNegotiates,
            507 => Self::InsufficientStorage,
            509 => Self::BandwidthLimitExceeded,
            510 => Self::NotExtended,
            511 => Self::NetworkAuthenticationRequired,
            _ => Self::Unregistered,
        }
    }

    /// Whether this kind is part of the registry.
    #[must_use]
    pub fn is_registered(self) -> bool {
        self != Self::Unregistered
    }
}
