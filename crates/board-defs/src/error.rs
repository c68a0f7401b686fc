/// Longest pin name kept in an [`Error::UnknownPin`]; longer names are cut.
pub const MAX_NAME_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("no pin named {name}")]
    UnknownPin { name: heapless::String<MAX_NAME_LEN> },
    #[error("{name} is not on an MCU GPIO")]
    InvalidGpio { name: &'static str },
}

impl Error {
    pub(crate) fn unknown_pin(name: &str) -> Self {
        let mut owned = heapless::String::new();
        for c in name.chars() {
            if owned.push(c).is_err() {
                break;
            }
        }
        Error::UnknownPin { name: owned }
    }
}
