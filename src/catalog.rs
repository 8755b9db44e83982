//! Built-in game content
//!
//! Courses, store items, collectibles and discovery points are fixed; only
//! which of them the player owns is stored.

use std::fmt;

/// How hard a collectible is to find
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rarity {
    Comum,
    Raro,
    Lendario,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rarity::Comum => write!(f, "comum"),
            Rarity::Raro => write!(f, "raro"),
            Rarity::Lendario => write!(f, "lendário"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collectible {
    pub id: u32,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub rarity: Rarity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreItem {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub price: i64,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Percent complete
    pub progress: u8,
}

/// A place with a QR code the player can scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryPoint {
    pub qr_id: &'static str,
    pub place: &'static str,
}

pub static COLLECTIBLES: &[Collectible] = &[
    Collectible {
        id: 1,
        name: "Semente Brilhante",
        emoji: "✨",
        description: "Uma semente que pulsa com uma luz suave.",
        rarity: Rarity::Comum,
    },
    Collectible {
        id: 2,
        name: "Gota de Orvalho",
        emoji: "💧",
        description: "Reflete todas as cores do arco-íris.",
        rarity: Rarity::Comum,
    },
    Collectible {
        id: 3,
        name: "Folha de Outono",
        emoji: "🍂",
        description: "Nunca murcha, mantendo sempre suas cores vibrantes.",
        rarity: Rarity::Comum,
    },
    Collectible {
        id: 4,
        name: "Regador de Prata",
        emoji: "🥈",
        description: "Faz qualquer planta crescer mais feliz.",
        rarity: Rarity::Raro,
    },
    Collectible {
        id: 5,
        name: "Abóbora Risonha",
        emoji: "🎃",
        description: "Dizem que ela conta piadas sobre agricultura.",
        rarity: Rarity::Raro,
    },
    Collectible {
        id: 6,
        name: "Trator Dourado",
        emoji: "🚜",
        description: "Um trator lendário que ara os campos do conhecimento.",
        rarity: Rarity::Lendario,
    },
];

pub static STORE_ITEMS: &[StoreItem] = &[
    StoreItem {
        id: 1,
        name: "Fertilizante Mágico",
        description: "Acelera o crescimento da sua planta.",
        price: 50,
        icon: "🧪",
    },
    StoreItem {
        id: 2,
        name: "Trator Novo",
        description: "Melhora a eficiência da sua fazenda.",
        price: 200,
        icon: "🚜",
    },
    StoreItem {
        id: 3,
        name: "Sementes Raras",
        description: "Plante algo exótico e valioso.",
        price: 120,
        icon: "✨",
    },
];

pub static COURSES: &[Course] = &[
    Course {
        id: 1,
        title: "Empreendedorismo no Agro 4.0",
        description: "Aprenda a inovar e criar negócios de sucesso no campo.",
        progress: 75,
    },
    Course {
        id: 2,
        title: "Tecnologia e Sustentabilidade",
        description: "Descubra como a tecnologia pode aumentar a produtividade de forma sustentável.",
        progress: 30,
    },
];

pub static DISCOVERY_POINTS: &[DiscoveryPoint] = &[DiscoveryPoint {
    qr_id: "BIBLIO_01",
    place: "Biblioteca",
}];

pub fn store_item(id: u32) -> Option<&'static StoreItem> {
    STORE_ITEMS.iter().find(|i| i.id == id)
}

/// Discovery point for a scanned code (case-insensitive, surrounding
/// whitespace ignored)
pub fn discovery_point(qr_id: &str) -> Option<&'static DiscoveryPoint> {
    let qr_id = qr_id.trim();
    DISCOVERY_POINTS
        .iter()
        .find(|p| p.qr_id.eq_ignore_ascii_case(qr_id))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = COLLECTIBLES.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), COLLECTIBLES.len());

        let ids: HashSet<_> = STORE_ITEMS.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), STORE_ITEMS.len());

        let codes: HashSet<_> = DISCOVERY_POINTS
            .iter()
            .map(|p| p.qr_id.to_ascii_uppercase())
            .collect();
        assert_eq!(codes.len(), DISCOVERY_POINTS.len());
    }

    #[test]
    fn test_lookups() {
        assert_eq!(store_item(2).map(|i| i.price), Some(200));
        assert!(store_item(99).is_none());
        assert_eq!(discovery_point(" biblio_01 ").map(|p| p.place), Some("Biblioteca"));
        assert!(discovery_point("NOPE").is_none());
    }
}
