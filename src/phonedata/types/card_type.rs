//! Conventional names for the card-type byte.
//!
//! The codec carries card types as raw [`CardTypeId`] bytes. The published
//! data set uses the ids below; anything else is kept as [`CardType::Other`].

use std::fmt;

use super::models::CardTypeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardType {
    ChinaMobile,
    ChinaUnicom,
    ChinaTelecom,
    TelecomVirtual,
    UnicomVirtual,
    MobileVirtual,
    Other(u8),
}

impl CardType {
    /// Chinese carrier name as it appears in lookup results.
    pub fn name(&self) -> &'static str {
        match self {
            CardType::ChinaMobile => "移动",
            CardType::ChinaUnicom => "联通",
            CardType::ChinaTelecom => "电信",
            CardType::TelecomVirtual => "电信虚拟运营商",
            CardType::UnicomVirtual => "联通虚拟运营商",
            CardType::MobileVirtual => "移动虚拟运营商",
            CardType::Other(_) => "未知",
        }
    }

    pub fn id(&self) -> CardTypeId {
        CardTypeId(match self {
            CardType::ChinaMobile => 1,
            CardType::ChinaUnicom => 2,
            CardType::ChinaTelecom => 3,
            CardType::TelecomVirtual => 4,
            CardType::UnicomVirtual => 5,
            CardType::MobileVirtual => 6,
            CardType::Other(raw) => *raw,
        })
    }
}

impl From<CardTypeId> for CardType {
    fn from(id: CardTypeId) -> Self {
        match id.0 {
            1 => CardType::ChinaMobile,
            2 => CardType::ChinaUnicom,
            3 => CardType::ChinaTelecom,
            4 => CardType::TelecomVirtual,
            5 => CardType::UnicomVirtual,
            6 => CardType::MobileVirtual,
            raw => CardType::Other(raw),
        }
    }
}

impl From<CardType> for CardTypeId {
    fn from(card_type: CardType) -> Self {
        card_type.id()
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
