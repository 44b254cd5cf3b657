use async_trait::async_trait;

use crate::service::ESInner;
use api::contact::{ContactForm, InsertOutcome};

pub mod msg;
pub mod svc;

// these are the database RPC calls that the db service answers
//
// note that the response to the caller is in the ESMResp, and that the actual return
// of the message handler is for successfully sending the response
#[async_trait]
trait ESDbService: ESInner {
    async fn insert_contact(&self, form: ContactForm) -> anyhow::Result<InsertOutcome>;

    async fn check_connection(&self) -> anyhow::Result<()>;
}
