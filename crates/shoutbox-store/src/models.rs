/// Row shape handed back by the adapter. Carries exactly the two
/// client-visible fields; the insertion-order key never leaves the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMessage {
    pub text: String,
    pub timestamp: String,
}
