use serde::{Deserialize, Serialize};

/// Closing reply for one turn: the intent it answers and one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogResponse {
    pub intent_name: String,
    pub message: String,
}

impl DialogResponse {
    pub fn close(intent_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self { intent_name: intent_name.into(), message: message.into() }
    }

    pub fn to_envelope(&self) -> CloseEnvelope {
        CloseEnvelope {
            session_state: SessionState {
                dialog_action: DialogAction { kind: "Close".to_string() },
                intent: IntentState { name: self.intent_name.clone(), state: "Fulfilled".to_string() },
            },
            messages: vec![Message { content_type: "PlainText".to_string(), content: self.message.clone() }],
        }
    }
}

/// Wire form of a closing reply, as the conversational front-end expects it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CloseEnvelope {
    pub session_state: SessionState,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub dialog_action: DialogAction,
    pub intent: IntentState,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DialogAction {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntentState {
    pub name: String,
    pub state: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_matches_front_end_schema() {
        let envelope = DialogResponse::close("GetSymptomInfo", "Try breathing exercises").to_envelope();
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "sessionState": {
                    "dialogAction": { "type": "Close" },
                    "intent": { "name": "GetSymptomInfo", "state": "Fulfilled" }
                },
                "messages": [ { "contentType": "PlainText", "content": "Try breathing exercises" } ]
            })
        );
    }
}
