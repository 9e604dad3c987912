// src/domain/card.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single content panel on the board.
///
/// Ids are assigned by the store on creation and never change; higher
/// ids were created later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub is_important: bool,
    #[serde(default)]
    pub face_color: FaceColor,
    #[serde(default)]
    pub is_deleted: bool,
}

/// Closed set of card face colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceColor {
    #[default]
    Purple,
    Black,
    Orange,
    Yellow,
}

impl FaceColor {
    pub fn as_name(&self) -> &'static str {
        match self {
            FaceColor::Purple => "purple",
            FaceColor::Black => "black",
            FaceColor::Orange => "orange",
            FaceColor::Yellow => "yellow",
        }
    }

    /// Parse a stored color name. Unknown names are rejected rather
    /// than coerced to the default.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "purple" => Some(FaceColor::Purple),
            "black" => Some(FaceColor::Black),
            "orange" => Some(FaceColor::Orange),
            "yellow" => Some(FaceColor::Yellow),
            _ => None,
        }
    }
}

impl fmt::Display for FaceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_name())
    }
}

/// Partial flag update. `None` means the field is left untouched; only
/// fields the caller explicitly set are ever written to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_pinned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_important: Option<bool>,
}

impl FlagChanges {
    pub fn pin(value: bool) -> Self {
        Self {
            is_pinned: Some(value),
            is_important: None,
        }
    }

    pub fn important(value: bool) -> Self {
        Self {
            is_pinned: None,
            is_important: Some(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.is_pinned.is_none() && self.is_important.is_none()
    }
}

/// A card about to be created; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewCard {
    pub title: String,
    pub description: String,
    pub face_color: FaceColor,
}

impl NewCard {
    pub fn new(title: &str, description: &str, face_color: FaceColor) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            face_color,
        }
    }
}

/// Board ordering rule: pinned cards before unpinned, and within each
/// group the newest card (highest id) first.
pub fn sort_for_board(cards: &mut [Card]) {
    cards.sort_by(|a, b| b.is_pinned.cmp(&a.is_pinned).then(b.id.cmp(&a.id)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: i64, pinned: bool) -> Card {
        Card {
            id,
            title: format!("Card {id}"),
            description: "description".to_string(),
            is_pinned: pinned,
            is_important: false,
            face_color: FaceColor::Purple,
            is_deleted: false,
        }
    }

    #[test]
    fn given_mixed_pins_when_sorting_then_pinned_cards_come_first() {
        // Arrange
        let mut cards = vec![card(1, false), card(2, true), card(3, false), card(4, true)];

        // Act
        sort_for_board(&mut cards);

        // Assert
        let pins: Vec<bool> = cards.iter().map(|c| c.is_pinned).collect();
        assert_eq!(pins, vec![true, true, false, false]);
    }

    #[test]
    fn given_equal_pin_status_when_sorting_then_newest_id_comes_first() {
        // Arrange
        let mut cards = vec![card(1, false), card(3, false), card(2, false)];

        // Act
        sort_for_board(&mut cards);

        // Assert
        let ids: Vec<i64> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn given_card_json_when_serializing_then_uses_camel_case_wire_keys() {
        let value = serde_json::to_value(card(7, true)).expect("serialization should succeed");
        assert_eq!(value["id"], 7);
        assert_eq!(value["isPinned"], true);
        assert_eq!(value["isImportant"], false);
        assert_eq!(value["faceColor"], "purple");
        assert_eq!(value["isDeleted"], false);
    }

    #[test]
    fn given_omitted_field_when_serializing_changes_then_field_is_absent() {
        let value =
            serde_json::to_value(FlagChanges::pin(true)).expect("serialization should succeed");
        assert_eq!(value["isPinned"], true);
        assert!(value.get("isImportant").is_none());
    }

    #[test]
    fn given_unknown_color_name_when_parsing_then_returns_none() {
        assert_eq!(FaceColor::from_name("yellow"), Some(FaceColor::Yellow));
        assert_eq!(FaceColor::from_name("chartreuse"), None);
    }
}
