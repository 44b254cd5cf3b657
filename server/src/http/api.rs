use std::sync::Arc;

use axum::{
    extract::{Form, FromRequest, Multipart, Request, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use tracing::{debug, info, instrument};

use crate::{
    db::msg::DbMsg,
    http::{AppError, svc::HttpEndpoint},
};
use api::contact::{ContactForm, InsertOutcome};

// http api endpoints
//
// the contact endpoint answers in plain text rather than json: the outcome
// string is the whole response, and the status is 200 whatever the outcome.
// only a broken service (the db task gone away) turns into a 500

// the form fields from either encoding a browser might use.  a body that is
// neither (or no body at all) is a submission with both fields empty
pub(super) struct ContactSubmission(pub ContactForm);

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"))
}

impl<S> FromRequest<S> for ContactSubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_multipart(&req) {
            let mut multipart = Multipart::from_request(req, state).await?;
            let mut form = ContactForm::default();

            while let Some(field) = multipart.next_field().await? {
                let name = field.name().map(str::to_owned);

                match name.as_deref() {
                    Some("name") => form.name = field.text().await?,
                    Some("email") => form.email = field.text().await?,
                    _ => {}
                }
            }

            return Ok(ContactSubmission(form));
        }

        match Form::<ContactForm>::from_request(req, state).await {
            Ok(Form(form)) => Ok(ContactSubmission(form)),
            Err(rejection) => {
                debug!({ reason = %rejection }, "no form fields in submission");
                Ok(ContactSubmission(ContactForm::default()))
            }
        }
    }
}

// contact form submission
#[instrument(skip_all)]
pub(super) async fn submit_contact(
    State(state): State<Arc<HttpEndpoint>>,
    ContactSubmission(form): ContactSubmission,
) -> Result<Response, AppError> {
    let (tx, rx) = tokio::sync::oneshot::channel();

    state
        .db_svc_sender
        .send(DbMsg::InsertContact { resp: tx, form }.into())
        .await?;

    let outcome = rx.await??;

    info!({ outcome = %outcome }, "contact form processed");

    Ok((StatusCode::OK, outcome.to_string()).into_response())
}

// anything other than a submission only opens and closes a connection, and
// says nothing unless that fails
#[instrument(skip_all)]
pub(super) async fn check_contact_db(
    State(state): State<Arc<HttpEndpoint>>,
) -> Result<Response, AppError> {
    let (tx, rx) = tokio::sync::oneshot::channel();

    state
        .db_svc_sender
        .send(DbMsg::CheckConnection { resp: tx }.into())
        .await?;

    let body = match rx.await? {
        Ok(()) => String::new(),
        Err(err) => InsertOutcome::ConnectionFailed(format!("{err:#}")).to_string(),
    };

    Ok((StatusCode::OK, body).into_response())
}
