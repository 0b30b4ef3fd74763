use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Variable bindings handed to the template engine.
pub type RenderContext = Map<String, Value>;

/// The parts of a host notification record that rendering cares about.
///
/// `body_template` and `subject_template` hold filesystem paths for
/// [`FileTemplateRenderer`](crate::renderer::FileTemplateRenderer) and
/// template keys for [`InlineTemplateRenderer`](crate::renderer::InlineTemplateRenderer).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Only used in log lines.
    pub id: String,
    #[serde(default)]
    pub body_template: Option<String>,
    #[serde(default)]
    pub subject_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extra_params: Map<String, Value>,
}

impl Notification {
    pub fn new(
        id: impl Into<String>,
        body_template: impl Into<String>,
        subject_template: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            body_template: Some(body_template.into()),
            subject_template: Some(subject_template.into()),
            ..Self::default()
        }
    }

    /// Body reference, with an empty string treated as absent.
    pub fn body_ref(&self) -> Option<&str> {
        non_empty(self.body_template.as_deref())
    }

    /// Subject reference, with an empty string treated as absent.
    pub fn subject_ref(&self) -> Option<&str> {
        non_empty(self.subject_template.as_deref())
    }
}

/// Raw subject and body sources supplied directly instead of by path or key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TemplateContent {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub body: String,
}

impl TemplateContent {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenderedEmail {
    pub subject: String,
    pub body: String,
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_host_record() {
        let json = r#"{
            "id": "123",
            "notificationType": "EMAIL",
            "title": "Test Notification",
            "bodyTemplate": "emails/welcome.jinja",
            "subjectTemplate": null,
            "extraParams": {}
        }"#;
        let notification: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(notification.id, "123");
        assert_eq!(notification.body_ref(), Some("emails/welcome.jinja"));
        assert_eq!(notification.subject_ref(), None);
        assert_eq!(notification.notification_type.as_deref(), Some("EMAIL"));
    }

    #[test]
    fn empty_references_count_as_absent() {
        let notification = Notification::new("1", "", "");
        assert_eq!(notification.body_ref(), None);
        assert_eq!(notification.subject_ref(), None);
    }
}
