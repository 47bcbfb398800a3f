use axum::body::Bytes;
use catalog::{Interaction, NewVlog};
use serde::de::DeserializeOwned;

use crate::error::AppError;

pub fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|_| AppError::MalformedPayload)
}

/// `active` maps straight onto a signed step: +1 when the reaction was added, -1 when removed.
pub fn delta(interaction: Interaction) -> i64 {
    if interaction.active { 1 } else { -1 }
}

pub fn get_new_vlog(body: &Bytes) -> Result<NewVlog, AppError> {
    let new_vlog = parse_body::<NewVlog>(body)?.trimmed();

    if new_vlog.has_missing_fields() {
        return Err(AppError::MissingFields);
    }

    Ok(new_vlog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta() {
        assert_eq!(delta(Interaction { active: true }), 1);
        assert_eq!(delta(Interaction { active: false }), -1);
    }

    #[test]
    fn test_malformed_interaction() {
        let bodies: [&[u8]; 4] = [b"{}", br#"{"active": "yes"}"#, b"", b"true"];

        for body in bodies {
            let result = parse_body::<Interaction>(&Bytes::copy_from_slice(body));
            assert!(matches!(result, Err(AppError::MalformedPayload)));
        }
    }

    #[test]
    fn test_new_vlog_requires_fields() {
        let body = Bytes::from_static(br#"{"creatorName": "Kim", "title": "   "}"#);
        assert!(matches!(get_new_vlog(&body), Err(AppError::MissingFields)));
    }
}
