use axum::{extract::State, response::Json};
use axum_extra::extract::Multipart;
use serde_json::json;

use crate::{
    errors::{AppError, Result},
    models::pledge::{Pledge, Update},
    state::AppState,
};

// Submit a student progress update. Multipart so the form can attach an
// image, video or file alongside the text. Attachment storage is not
// implemented: uploaded bytes are read and discarded, and the update records
// a null placeholder for each slot.
pub async fn create_update(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>> {
    let mut name = String::new();
    let mut text = String::new();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "name" => {
                name = field.text().await?;
            }
            "text" => {
                text = field.text().await?;
            }
            "image" | "video" | "file" => {
                // Drain the bytes so the form round-trips, then drop them.
                let data = field.bytes().await?;
                tracing::warn!(
                    "📎 Discarding {} byte '{}' attachment (storage not implemented)",
                    data.len(),
                    field_name
                );
            }
            _ => {}
        }
    }

    if name.is_empty() || text.is_empty() {
        return Err(AppError::invalid_data("name and text are required"));
    }

    let mut pledges = state.pledges.lock().await;
    let count = append_update(&mut pledges, &name, text)?;
    state.store.save(&pledges)?;

    tracing::info!("📢 Update posted for {} ({} total)", name, count);
    Ok(Json(json!({
        "success": true,
        "message": "Update posted successfully!",
        "total_updates": count,
    })))
}

// Finds the student's pledge by name and appends the update with null
// attachment placeholders. Returns the new update count.
fn append_update(pledges: &mut [Pledge], name: &str, text: String) -> Result<usize> {
    let pledge = pledges
        .iter_mut()
        .find(|p| p.name == name)
        .ok_or(AppError::PledgeNotFound)?;

    pledge.updates.push(Update {
        text,
        image: None,
        video: None,
        file: None,
    });

    Ok(pledge.updates.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pledge(name: &str) -> Pledge {
        Pledge {
            name: name.to_string(),
            skill: "Rust".to_string(),
            amount: "$50".to_string(),
            reward: "Weekly progress calls".to_string(),
            reviews: Vec::new(),
            updates: Vec::new(),
        }
    }

    #[test]
    fn update_for_unknown_student_is_not_found() {
        let mut pledges = vec![pledge("alice")];

        let err = append_update(&mut pledges, "nobody", "started today".to_string()).unwrap_err();
        assert!(matches!(err, AppError::PledgeNotFound));
        assert!(pledges[0].updates.is_empty());
    }

    #[test]
    fn appended_update_records_null_attachments() {
        let mut pledges = vec![pledge("alice")];

        append_update(&mut pledges, "alice", "first week done".to_string()).unwrap();
        let count = append_update(&mut pledges, "alice", "second week done".to_string()).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            pledges[0].updates,
            vec![
                Update {
                    text: "first week done".to_string(),
                    image: None,
                    video: None,
                    file: None,
                },
                Update {
                    text: "second week done".to_string(),
                    image: None,
                    video: None,
                    file: None,
                },
            ]
        );
    }
}
