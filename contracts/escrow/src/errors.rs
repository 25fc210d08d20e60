use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    TransactionNotFound = 1,
    MustBeInactive = 2,
    NotActive = 3,
    TransactionActive = 4,
    NotBuyerOrSeller = 5,
    TransferFailed = 6,
    ArithmeticOverflow = 7,
    InvalidParties = 8,
}

/// Coarse classification of [`Error`] for callers that branch on the failure class.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    NotFound,
    InvalidState,
    Unauthorized,
    TransferFailed,
    ArithmeticOverflow,
    InvalidInput,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TransactionNotFound => ErrorKind::NotFound,
            Error::MustBeInactive | Error::NotActive | Error::TransactionActive => {
                ErrorKind::InvalidState
            }
            Error::NotBuyerOrSeller => ErrorKind::Unauthorized,
            Error::TransferFailed => ErrorKind::TransferFailed,
            Error::ArithmeticOverflow => ErrorKind::ArithmeticOverflow,
            Error::InvalidParties => ErrorKind::InvalidInput,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Error::TransactionNotFound => "Transaction not found",
            Error::MustBeInactive => "Must be Inactive",
            Error::NotActive => "Not Active",
            Error::TransactionActive => "Transaction Active!",
            Error::NotBuyerOrSeller => "Not buyer or seller",
            Error::TransferFailed => "Token transfer failed",
            Error::ArithmeticOverflow => "Arithmetic overflow",
            Error::InvalidParties => "Buyer and seller must differ",
        }
    }
}
