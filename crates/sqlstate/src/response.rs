use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An `ErrorResponse` or `NoticeResponse` as parsed by the wire layer.
#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Clone,
    Deserialize,
    Serialize,
    typed_builder::TypedBuilder,
)]
pub struct ErrorResponse {
    /// SQLSTATE, kept verbatim even when malformed.
    #[serde(default)]
    #[builder(setter(into))]
    pub code: String,
    #[serde(default)]
    #[builder(setter(into))]
    pub message: String,
    #[serde(flatten)]
    #[builder(default)]
    pub fields: DiagnosticFields,
}

impl ErrorResponse {
    /// Collects the `(field type, value)` pairs of a protocol error or notice message.
    pub fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (u8, String)>,
    {
        let mut response = Self::default();
        for (field_type, value) in fields {
            response.insert_raw(field_type, value);
        }
        response
    }

    /// Stores a single field by its protocol type byte.
    pub fn insert_raw(&mut self, field_type: u8, value: String) {
        match field_type {
            b'C' => self.code = value,
            b'M' => self.message = value,
            _ => self.fields.insert_raw(field_type, value),
        }
    }
}

/// Everything a server error carries besides its code and message.
///
/// Values are kept as sent, nothing here is parsed or validated.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Clone, Deserialize, Serialize)]
pub struct DiagnosticFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity_nonlocalized: Option<String>,
    #[serde(default, alias = "details", skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_query: Option<String>,
    #[serde(default, rename = "where", skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routine: Option<String>,
    /// Fields this crate has no slot for, keyed by their name or protocol type character.
    #[serde(flatten)]
    pub other: BTreeMap<String, String>,
}

impl DiagnosticFields {
    /// Stores a field by its protocol type byte. `C` and `M` have no slot here and land in
    /// [`Self::other`] like any unknown type.
    pub fn insert_raw(&mut self, field_type: u8, value: String) {
        let slot = match field_type {
            b'S' => &mut self.severity,
            b'V' => &mut self.severity_nonlocalized,
            b'D' => &mut self.detail,
            b'H' => &mut self.hint,
            b'P' => &mut self.position,
            b'p' => &mut self.internal_position,
            b'q' => &mut self.internal_query,
            b'W' => &mut self.context,
            b's' => &mut self.schema,
            b't' => &mut self.table,
            b'c' => &mut self.column,
            b'd' => &mut self.datatype,
            b'n' => &mut self.constraint,
            b'F' => &mut self.file,
            b'L' => &mut self.line,
            b'R' => &mut self.routine,
            other => {
                self.other.insert(char::from(other).to_string(), value);
                return;
            }
        };
        *slot = Some(value);
    }

    /// The severity, preferring the never-localized variant.
    #[must_use]
    pub fn severity(&self) -> Option<&str> {
        self.severity_nonlocalized
            .as_deref()
            .or(self.severity.as_deref())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn from_protocol_fields() {
        let response = ErrorResponse::from_fields([
            (b'S', "ERROR".to_owned()),
            (b'V', "ERROR".to_owned()),
            (b'C', "23505".to_owned()),
            (
                b'M',
                "duplicate key value violates unique constraint \"users_pkey\"".to_owned(),
            ),
            (b'D', "Key (id)=(1) already exists.".to_owned()),
            (b's', "public".to_owned()),
            (b't', "users".to_owned()),
            (b'n', "users_pkey".to_owned()),
            (b'F', "nbtinsert.c".to_owned()),
            (b'L', "664".to_owned()),
            (b'R', "_bt_check_unique".to_owned()),
        ]);

        assert_eq!(response.code, "23505");
        assert_eq!(
            response.message,
            "duplicate key value violates unique constraint \"users_pkey\""
        );
        assert_eq!(response.fields.severity(), Some("ERROR"));
        assert_eq!(
            response.fields.detail.as_deref(),
            Some("Key (id)=(1) already exists.")
        );
        assert_eq!(response.fields.table.as_deref(), Some("users"));
        assert_eq!(response.fields.constraint.as_deref(), Some("users_pkey"));
        assert_eq!(response.fields.line.as_deref(), Some("664"));
        assert!(response.fields.other.is_empty());
    }

    #[test]
    fn unknown_field_types_are_kept() {
        let mut fields = DiagnosticFields::default();
        fields.insert_raw(b'Z', "future".to_owned());
        fields.insert_raw(b'C', "not a slot here".to_owned());

        assert_eq!(fields.other.get("Z").map(String::as_str), Some("future"));
        assert_eq!(
            fields.other.get("C").map(String::as_str),
            Some("not a slot here")
        );
        assert!(!fields.is_empty());
    }

    #[test]
    fn severity_prefers_nonlocalized() {
        let fields = DiagnosticFields {
            severity: Some("FEHLER".to_owned()),
            severity_nonlocalized: Some("ERROR".to_owned()),
            ..Default::default()
        };
        assert_eq!(fields.severity(), Some("ERROR"));

        let fields = DiagnosticFields {
            severity: Some("NOTICE".to_owned()),
            ..Default::default()
        };
        assert_eq!(fields.severity(), Some("NOTICE"));
        assert_eq!(DiagnosticFields::default().severity(), None);
    }

    #[test]
    fn builder_defaults_fields() {
        let response = ErrorResponse::builder()
            .code("40001")
            .message("could not serialize access")
            .build();
        assert!(response.fields.is_empty());
        assert_eq!(response.code, "40001");
    }

    #[test]
    fn deserialize_json_payload() {
        let mut payload = br#"{
            "code": "42P01",
            "message": "relation \"foo\" does not exist",
            "details": "Table was dropped.",
            "hint": "Check the spelling.",
            "position": "15",
            "where": "SQL function \"f\"",
            "x-extra": "kept"
        }"#
        .to_vec();
        let response = simd_json::from_slice::<ErrorResponse>(&mut payload).unwrap();

        assert_eq!(response.code, "42P01");
        assert_eq!(response.fields.detail.as_deref(), Some("Table was dropped."));
        assert_eq!(response.fields.hint.as_deref(), Some("Check the spelling."));
        assert_eq!(response.fields.position.as_deref(), Some("15"));
        assert_eq!(
            response.fields.context.as_deref(),
            Some("SQL function \"f\"")
        );
        assert_eq!(
            response.fields.other.get("x-extra").map(String::as_str),
            Some("kept")
        );
    }

    #[test]
    fn missing_code_and_message_default_to_empty() {
        let mut payload = br#"{"hint": "none"}"#.to_vec();
        let response = simd_json::from_slice::<ErrorResponse>(&mut payload).unwrap();
        assert_eq!(response.code, "");
        assert_eq!(response.message, "");
        assert_eq!(response.fields.hint.as_deref(), Some("none"));
    }
}
