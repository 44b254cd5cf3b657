use crate::service::{ESM, ESMResp};
use api::contact::{ContactForm, InsertOutcome};

#[derive(Debug)]
pub enum DbMsg {
    // the outcome carries its own failure text, so the outer Result only
    // fails when the service itself could not answer
    InsertContact {
        resp: ESMResp<InsertOutcome>,
        form: ContactForm,
    },
    CheckConnection {
        resp: ESMResp<()>,
    },
}

impl From<DbMsg> for ESM {
    fn from(value: DbMsg) -> Self {
        ESM::Db(value)
    }
}
