//! Submission pipeline: enrich, create, assign.

use log::{error, info};

use crate::backend::{ActivityBackend, ActivityDraft, BackendError, Recipient};
use crate::constants::ERROR_SUBMIT_FAILED;

/// Run the full submission chain against the backend.
///
/// When the draft references an activity model, the model's question ids are
/// fetched first and merged into the payload (a model without questions
/// leaves the draft unchanged). Then the activity is created and assigned to
/// the recipients. The first failing call aborts the chain.
pub async fn submit_activity(
    backend: &dyn ActivityBackend,
    draft: &ActivityDraft,
    recipients: &[Recipient],
) -> Result<String, BackendError> {
    let mut draft = draft.clone();
    if let Some(model_id) = &draft.model_id {
        if let Some(question_ids) = backend.fetch_model_questions(model_id).await? {
            draft.question_ids = question_ids;
        }
    }

    let activity_id = backend.create_activity(&draft).await?;
    backend.assign_activity(&activity_id, recipients).await?;
    info!("activity {activity_id} assigned to {} recipient(s)", recipients.len());
    Ok(activity_id)
}

/// Human-readable message for a failed submission.
///
/// The detailed cause is only logged for diagnostics; end users never see it
/// directly.
pub fn failure_message(error: &BackendError) -> String {
    error!("activity submission failed: {error}");
    ERROR_SUBMIT_FAILED.to_string()
}
