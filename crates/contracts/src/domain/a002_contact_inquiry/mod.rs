pub mod aggregate;
pub mod errors;

pub use aggregate::{
    ContactFields, ContactForm, InquiryPayload, SubmissionState, HONEYPOT_FIELD, SUBJECT_FIELD,
};
pub use errors::{SubmitError, SubmitRejected};
