//! Game store - the rules of the chicken hunt
//!
//! Holds the whole game state in memory and enforces every invariant:
//! roles, the shared tab, partner nominations and the one-time chicken draw.
//! Persistence is handled outside, through [`GameSnapshot`] aggregates.

use std::collections::{HashMap, HashSet};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;

use crate::domain::entities::{placeholder_url, Announcement, Expense, Photo, Player, PlayerRole};
use crate::domain::value_objects::{GameMeta, GameSnapshot, PartnerChoice, Team};

/// Errors raised by game rules
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error("{0}")]
    Validation(String),
    #[error("No confirmed teams available")]
    NoTeams,
}

impl GameError {
    fn validation(message: &str) -> Self {
        GameError::Validation(message.to_string())
    }

    /// Conflicts are well-formed requests the current game state cannot honour
    pub fn is_conflict(&self) -> bool {
        matches!(self, GameError::NoTeams)
    }
}

/// Outcome of drawing the chickens from the confirmed teams
#[derive(Debug, Clone, PartialEq)]
pub enum ChickenDraw {
    AlreadyAssigned,
    Chosen {
        team: Team,
        announcement: Announcement,
    },
}

/// In-memory game state and rules
pub struct GameStore {
    players: Vec<Player>,
    photos: Vec<Photo>,
    meta: GameMeta,
    rng: ChaCha8Rng,
}

impl GameStore {
    /// Create an empty game. A seed makes every draw reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            players: Vec::new(),
            photos: Vec::new(),
            meta: GameMeta::default(),
            rng,
        }
    }

    // ========== Players ==========

    pub fn add_player(&mut self, name: &str) -> Result<Player, GameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::validation("Name required"));
        }

        let player = Player::new(name.to_string());
        self.players.push(player.clone());
        Ok(player)
    }

    pub fn list_players(&self) -> &[Player] {
        &self.players
    }

    pub fn get_player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn chickens(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.is_chicken()).collect()
    }

    fn set_role(&mut self, id: &str, role: PlayerRole) {
        if let Some(player) = self.players.iter_mut().find(|p| p.id == id) {
            player.role = role;
        }
    }

    // ========== Photos ==========

    pub fn add_photo(
        &mut self,
        bar_name: &str,
        lat: Option<f64>,
        lng: Option<f64>,
        url: Option<String>,
    ) -> Result<Photo, GameError> {
        let bar_name = bar_name.trim();
        let (lat, lng) = match (lat, lng) {
            (Some(lat), Some(lng)) if !bar_name.is_empty() => (lat, lng),
            _ => return Err(GameError::validation("Missing required fields: barName, lat, lng")),
        };

        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(GameError::validation("Latitude must be between -90 and 90"));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(GameError::validation("Longitude must be between -180 and 180"));
        }

        let url = url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| placeholder_url(bar_name));

        let photo = Photo::new(bar_name.to_string(), lat, lng, url);
        self.photos.push(photo.clone());
        Ok(photo)
    }

    pub fn list_photos(&self) -> &[Photo] {
        &self.photos
    }

    // ========== Tab ==========

    pub fn balance(&self) -> Decimal {
        self.meta.balance
    }

    /// Credit the tab (deposit)
    pub fn adjust_balance(&mut self, delta: Decimal) -> Result<Decimal, GameError> {
        if delta <= Decimal::ZERO {
            return Err(GameError::validation("Invalid amount"));
        }
        self.meta.balance = self
            .meta
            .balance
            .checked_add(delta)
            .ok_or_else(|| GameError::validation("Amount out of range"))?;
        Ok(self.meta.balance)
    }

    /// Overwrite the tab (admin)
    pub fn set_balance(&mut self, amount: Decimal) -> Result<Decimal, GameError> {
        if amount < Decimal::ZERO {
            return Err(GameError::validation(
                "Invalid amount. Must be a positive number.",
            ));
        }
        self.meta.balance = amount;
        Ok(self.meta.balance)
    }

    /// Append an expense and charge it to the tab. The balance has no floor.
    pub fn record_expense(
        &mut self,
        amount: Decimal,
        description: &str,
        player_name: &str,
    ) -> Result<Expense, GameError> {
        let description = description.trim();
        let player_name = player_name.trim();
        if amount <= Decimal::ZERO || description.is_empty() || player_name.is_empty() {
            return Err(GameError::validation(
                "Missing required fields: amount, description, playerName",
            ));
        }

        let balance = self
            .meta
            .balance
            .checked_sub(amount)
            .ok_or_else(|| GameError::validation("Amount out of range"))?;

        let expense = Expense::new(amount, description.to_string(), player_name.to_string());
        self.meta.balance = balance;
        self.meta.expenses.push(expense.clone());
        Ok(expense)
    }

    pub fn list_expenses(&self) -> &[Expense] {
        &self.meta.expenses
    }

    // ========== Chickens ==========

    pub fn chickens_assigned(&self) -> bool {
        self.meta.chickens_assigned
    }

    /// Draw two chickens uniformly among all players.
    ///
    /// Returns `false` without touching anything when chickens are already
    /// assigned or fewer than two players joined.
    pub fn assign_chickens_randomly(&mut self) -> bool {
        if self.meta.chickens_assigned || self.players.len() < 2 {
            return false;
        }

        // Fisher-Yates
        let mut indices: Vec<usize> = (0..self.players.len()).collect();
        for i in (1..indices.len()).rev() {
            let j = self.rng.gen_range(0..=i);
            indices.swap(i, j);
        }

        for &index in &indices[..2] {
            self.players[index].role = PlayerRole::Chicken;
        }
        self.meta.chickens_assigned = true;

        tracing::info!(
            "Chickens assigned randomly: {} and {}",
            self.players[indices[0]].name,
            self.players[indices[1]].name
        );
        true
    }

    // ========== Teams ==========

    pub fn set_partner(&mut self, player_id: &str, partner_id: &str) -> Result<(), GameError> {
        if player_id == partner_id {
            return Err(GameError::validation("A player cannot partner with themselves"));
        }
        if self.get_player(player_id).is_none() {
            return Err(GameError::Validation(format!("Unknown player: {}", player_id)));
        }
        if self.get_player(partner_id).is_none() {
            return Err(GameError::Validation(format!("Unknown partner: {}", partner_id)));
        }

        match self
            .meta
            .partner_choices
            .iter_mut()
            .find(|c| c.player_id == player_id)
        {
            Some(choice) => choice.partner_id = partner_id.to_string(),
            None => self.meta.partner_choices.push(PartnerChoice {
                player_id: player_id.to_string(),
                partner_id: partner_id.to_string(),
            }),
        }
        Ok(())
    }

    /// Mutual nominations, in order of first nomination
    pub fn compute_teams(&self) -> Vec<Team> {
        let nominations: HashMap<&str, &str> = self
            .meta
            .partner_choices
            .iter()
            .map(|c| (c.player_id.as_str(), c.partner_id.as_str()))
            .collect();

        let mut placed: HashSet<&str> = HashSet::new();
        let mut teams = Vec::new();

        for choice in &self.meta.partner_choices {
            let (a, b) = (choice.player_id.as_str(), choice.partner_id.as_str());
            if placed.contains(a) || placed.contains(b) {
                continue;
            }
            if nominations.get(b) == Some(&a) {
                placed.insert(a);
                placed.insert(b);
                teams.push(Team::new(a, b));
            }
        }

        teams
    }

    /// Pick one confirmed team at random and make both members the chickens
    pub fn choose_chickens_from_teams(&mut self) -> Result<ChickenDraw, GameError> {
        let teams = self.compute_teams();
        if teams.is_empty() {
            return Err(GameError::NoTeams);
        }
        if self.meta.chickens_assigned {
            return Ok(ChickenDraw::AlreadyAssigned);
        }

        let team = teams[self.rng.gen_range(0..teams.len())].clone();
        let (first, second) = match (self.get_player(&team.0), self.get_player(&team.1)) {
            (Some(first), Some(second)) => (first.clone(), second.clone()),
            _ => return Err(GameError::NoTeams),
        };

        self.set_role(&first.id, PlayerRole::Chicken);
        self.set_role(&second.id, PlayerRole::Chicken);
        self.meta.chickens_assigned = true;

        let announcement = Announcement::chickens_chosen(&first, &second);
        self.meta.announcement = Some(announcement.clone());

        tracing::info!("{}", announcement.message);
        Ok(ChickenDraw::Chosen { team, announcement })
    }

    pub fn announcement(&self) -> Option<&Announcement> {
        self.meta.announcement.as_ref()
    }

    // ========== Lifecycle ==========

    /// Start a new game epoch. Everything goes.
    pub fn reset_game(&mut self) {
        self.players.clear();
        self.photos.clear();
        self.meta = GameMeta::default();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: self.players.clone(),
            photos: self.photos.clone(),
            meta: self.meta.clone(),
        }
    }

    pub fn replace_players(&mut self, players: Vec<Player>) {
        self.players = players;
    }

    pub fn replace_photos(&mut self, photos: Vec<Photo>) {
        self.photos = photos;
    }

    pub fn replace_meta(&mut self, meta: GameMeta) {
        self.meta = meta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_players(seed: u64, names: &[&str]) -> (GameStore, Vec<Player>) {
        let mut store = GameStore::new(Some(seed));
        let players = names
            .iter()
            .map(|n| store.add_player(n).unwrap())
            .collect();
        (store, players)
    }

    #[test]
    fn test_add_player_trims_and_rejects_blank() {
        let mut store = GameStore::new(Some(1));
        assert!(matches!(store.add_player("   "), Err(GameError::Validation(_))));

        let player = store.add_player("  Al ").unwrap();
        assert_eq!(player.name, "Al");
        assert_eq!(player.role, PlayerRole::Player);
        assert_eq!(store.list_players().len(), 1);
    }

    #[test]
    fn test_player_ids_are_unique() {
        let (store, _) = store_with_players(1, &["a", "a", "a", "a", "a", "a", "a", "a"]);
        let ids: HashSet<&str> = store.list_players().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_assign_chickens_needs_two_players() {
        let (mut store, _) = store_with_players(7, &["Solo"]);
        assert!(!store.assign_chickens_randomly());
        assert!(store.chickens().is_empty());
        assert!(!store.chickens_assigned());
    }

    #[test]
    fn test_assign_chickens_exactly_two_and_idempotent() {
        let (mut store, _) = store_with_players(42, &["A", "B", "C", "D", "E"]);

        assert!(store.assign_chickens_randomly());
        let first: Vec<String> = store.chickens().iter().map(|p| p.id.clone()).collect();
        assert_eq!(first.len(), 2);
        assert_ne!(first[0], first[1]);

        assert!(!store.assign_chickens_randomly());
        let second: Vec<String> = store.chickens().iter().map(|p| p.id.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_assign_chickens_is_uniform() {
        const N: usize = 5;
        const TRIALS: u64 = 10_000;
        let mut counts = [0u32; N];

        for seed in 0..TRIALS {
            let (mut store, players) = store_with_players(seed, &["A", "B", "C", "D", "E"]);
            store.assign_chickens_randomly();
            for (i, p) in players.iter().enumerate() {
                if store.get_player(&p.id).unwrap().is_chicken() {
                    counts[i] += 1;
                }
            }
        }

        let expected = 2.0 / N as f64;
        for count in counts {
            let freq = count as f64 / TRIALS as f64;
            assert!(
                (freq - expected).abs() < 0.03,
                "frequency {} too far from {}",
                freq,
                expected
            );
        }
    }

    #[test]
    fn test_record_expense_charges_tab() {
        let mut store = GameStore::new(Some(1));
        store.set_balance(Decimal::from(50)).unwrap();

        let expense = store.record_expense(Decimal::from(10), "pizza", "Al").unwrap();

        assert_eq!(store.balance(), Decimal::from(40));
        assert_eq!(store.list_expenses().len(), 1);
        assert_eq!(store.list_expenses()[0], expense);
        assert_eq!(expense.description, "pizza");
        assert_eq!(expense.player_name, "Al");
    }

    #[test]
    fn test_record_expense_allows_negative_balance() {
        let mut store = GameStore::new(Some(1));
        store.record_expense(Decimal::new(1250, 2), "beer", "Bo").unwrap();
        assert_eq!(store.balance(), Decimal::new(-1250, 2));
    }

    #[test]
    fn test_balance_overflow_is_rejected() {
        let mut store = GameStore::new(Some(1));
        store.set_balance(Decimal::MAX).unwrap();
        let err = store.adjust_balance(Decimal::ONE).unwrap_err();
        assert_eq!(err, GameError::Validation("Amount out of range".to_string()));
        assert_eq!(store.balance(), Decimal::MAX);

        let mut store = GameStore::new(Some(1));
        store.record_expense(Decimal::MAX, "round", "Al").unwrap();
        assert!(store.record_expense(Decimal::ONE, "one more", "Al").is_err());
        assert_eq!(store.balance(), -Decimal::MAX);
        assert_eq!(store.list_expenses().len(), 1);
    }

    #[test]
    fn test_record_expense_validation() {
        let mut store = GameStore::new(Some(1));
        assert!(store.record_expense(Decimal::ZERO, "pizza", "Al").is_err());
        assert!(store.record_expense(Decimal::from(-3), "pizza", "Al").is_err());
        assert!(store.record_expense(Decimal::from(3), " ", "Al").is_err());
        assert!(store.record_expense(Decimal::from(3), "pizza", "").is_err());
        assert!(store.list_expenses().is_empty());
        assert_eq!(store.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_adjust_balance_rejects_non_positive() {
        let mut store = GameStore::new(Some(1));
        assert!(store.adjust_balance(Decimal::ZERO).is_err());
        assert!(store.adjust_balance(Decimal::from(-1)).is_err());
        assert_eq!(store.adjust_balance(Decimal::new(2550, 2)).unwrap(), Decimal::new(2550, 2));
        assert_eq!(store.adjust_balance(Decimal::from(5)).unwrap(), Decimal::new(3050, 2));
    }

    #[test]
    fn test_set_balance_negative_fails_and_keeps_balance() {
        let mut store = GameStore::new(Some(1));
        store.set_balance(Decimal::from(20)).unwrap();

        let err = store.set_balance(Decimal::from(-5)).unwrap_err();
        assert!(matches!(err, GameError::Validation(_)));
        assert_eq!(store.balance(), Decimal::from(20));

        assert_eq!(store.set_balance(Decimal::ZERO).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_add_photo() {
        let mut store = GameStore::new(Some(1));
        assert!(store.add_photo("", Some(1.0), Some(2.0), None).is_err());
        assert!(store.add_photo("Bar", None, Some(2.0), None).is_err());
        assert!(store.add_photo("Bar", Some(1.0), None, None).is_err());
        assert!(store.add_photo("Bar", Some(91.0), Some(2.0), None).is_err());
        assert!(store.add_photo("Bar", Some(1.0), Some(f64::NAN), None).is_err());

        let photo = store
            .add_photo("Tap Room", Some(40.7), Some(-74.0), Some("https://img/x.jpg".into()))
            .unwrap();
        assert_eq!(photo.url, "https://img/x.jpg");

        let placeholder = store.add_photo("Pub", Some(0.0), Some(0.0), None).unwrap();
        assert!(placeholder.url.ends_with("?text=Pub"));

        assert_eq!(store.list_photos(), &[photo, placeholder]);
    }

    #[test]
    fn test_set_partner_validation() {
        let (mut store, players) = store_with_players(1, &["A", "B"]);
        let (a, b) = (&players[0].id, &players[1].id);

        assert!(store.set_partner(a, a).is_err());
        assert!(store.set_partner(a, "ghost").is_err());
        assert!(store.set_partner("ghost", b).is_err());
        assert!(store.set_partner(a, b).is_ok());
    }

    #[test]
    fn test_teams_require_mutual_nomination() {
        let (mut store, players) = store_with_players(1, &["A", "B"]);
        let (a, b) = (&players[0].id, &players[1].id);

        store.set_partner(a, b).unwrap();
        assert!(store.compute_teams().is_empty());

        store.set_partner(b, a).unwrap();
        assert_eq!(store.compute_teams(), vec![Team::new(a.as_str(), b.as_str())]);
    }

    #[test]
    fn test_teams_place_each_player_once_in_discovery_order() {
        let (mut store, p) = store_with_players(1, &["A", "B", "C", "D", "E"]);
        let ids: Vec<&str> = p.iter().map(|p| p.id.as_str()).collect();

        // C -> D first, then A <-> B, then D -> C, E -> A
        store.set_partner(ids[2], ids[3]).unwrap();
        store.set_partner(ids[0], ids[1]).unwrap();
        store.set_partner(ids[1], ids[0]).unwrap();
        store.set_partner(ids[3], ids[2]).unwrap();
        store.set_partner(ids[4], ids[0]).unwrap();

        assert_eq!(
            store.compute_teams(),
            vec![Team::new(ids[2], ids[3]), Team::new(ids[0], ids[1])]
        );
    }

    #[test]
    fn test_renomination_breaks_team() {
        let (mut store, p) = store_with_players(1, &["A", "B", "C"]);
        let ids: Vec<&str> = p.iter().map(|p| p.id.as_str()).collect();

        store.set_partner(ids[0], ids[1]).unwrap();
        store.set_partner(ids[1], ids[0]).unwrap();
        store.set_partner(ids[0], ids[2]).unwrap();

        assert!(store.compute_teams().is_empty());
    }

    #[test]
    fn test_choose_chickens_without_teams_conflicts() {
        let (mut store, _) = store_with_players(1, &["A", "B"]);
        let err = store.choose_chickens_from_teams().unwrap_err();
        assert_eq!(err, GameError::NoTeams);
        assert!(err.is_conflict());
        assert!(store.chickens().is_empty());
    }

    #[test]
    fn test_choose_chickens_from_single_team() {
        let (mut store, p) = store_with_players(3, &["Al", "Bea", "Cy"]);
        store.set_partner(&p[0].id, &p[1].id).unwrap();
        store.set_partner(&p[1].id, &p[0].id).unwrap();

        let draw = store.choose_chickens_from_teams().unwrap();
        let (team, announcement) = match draw {
            ChickenDraw::Chosen { team, announcement } => (team, announcement),
            ChickenDraw::AlreadyAssigned => panic!("expected a draw"),
        };

        assert_eq!(team, Team::new(p[0].id.as_str(), p[1].id.as_str()));
        assert!(store.get_player(&p[0].id).unwrap().is_chicken());
        assert!(store.get_player(&p[1].id).unwrap().is_chicken());
        assert!(!store.get_player(&p[2].id).unwrap().is_chicken());
        assert!(announcement.message.contains("Al"));
        assert!(announcement.message.contains("Bea"));
        assert_eq!(announcement.players.len(), 2);
        assert_eq!(store.announcement(), Some(&announcement));

        assert_eq!(
            store.choose_chickens_from_teams().unwrap(),
            ChickenDraw::AlreadyAssigned
        );
    }

    #[test]
    fn test_reset_game_starts_new_epoch() {
        let (mut store, p) = store_with_players(9, &["A", "B", "C"]);
        store.set_balance(Decimal::from(50)).unwrap();
        store.record_expense(Decimal::from(10), "pizza", "A").unwrap();
        store.add_photo("Bar", Some(1.0), Some(1.0), None).unwrap();
        store.set_partner(&p[0].id, &p[1].id).unwrap();
        assert!(store.assign_chickens_randomly());

        store.reset_game();

        assert!(store.list_players().is_empty());
        assert!(store.list_photos().is_empty());
        assert!(store.list_expenses().is_empty());
        assert!(store.compute_teams().is_empty());
        assert!(store.announcement().is_none());
        assert_eq!(store.balance(), Decimal::ZERO);

        store.add_player("X").unwrap();
        store.add_player("Y").unwrap();
        assert!(store.assign_chickens_randomly());
    }
}
