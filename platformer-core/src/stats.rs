//! Health and stamina ledger with saturation.
//!
//! The ledger only mutates numbers; forcing the `Dead` state on a lethal hit
//! is wired by [`Player::take_damage`](crate::player::Player::take_damage).

use serde::{Deserialize, Serialize};

use crate::constants::{PLAYER_MAX_HEALTH, PLAYER_MAX_STAMINA, STAMINA_REGEN_PER_FRAME};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub health: u16,
    pub max_health: u16,
    pub stamina: u16,
    pub max_stamina: u16,
}

impl Default for Stats {
    fn default() -> Stats {
        Stats::new()
    }
}

impl Stats {
    pub const fn new() -> Stats {
        Stats {
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            stamina: PLAYER_MAX_STAMINA,
            max_stamina: PLAYER_MAX_STAMINA,
        }
    }

    /// Subtract damage. Returns `true` while still alive; a lethal hit zeroes
    /// health and returns `false`.
    pub fn apply_damage(&mut self, amount: u16) -> bool {
        if self.health > amount {
            self.health -= amount;
            true
        } else {
            self.health = 0;
            false
        }
    }

    pub fn heal(&mut self, amount: u16) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    /// Conditional debit: only spends when the full amount is available.
    pub fn use_stamina(&mut self, amount: u16) -> bool {
        if self.stamina >= amount {
            self.stamina -= amount;
            true
        } else {
            false
        }
    }

    pub fn has_stamina(&self, amount: u16) -> bool {
        self.stamina >= amount
    }

    /// Passive regeneration, one point per frame up to the cap.
    pub fn regen_stamina(&mut self) {
        if self.stamina < self.max_stamina {
            self.stamina += STAMINA_REGEN_PER_FRAME;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_below_health_leaves_player_alive() {
        let mut stats = Stats::new();
        assert!(stats.apply_damage(30));
        assert_eq!(stats.health, 70);
    }

    #[test]
    fn lethal_damage_zeroes_health() {
        let mut stats = Stats::new();
        assert!(!stats.apply_damage(150));
        assert_eq!(stats.health, 0);
    }

    #[test]
    fn exact_damage_is_lethal() {
        // health > amount is the survival condition, so an exact hit kills.
        let mut stats = Stats::new();
        assert!(!stats.apply_damage(100));
        assert_eq!(stats.health, 0);
    }

    #[test]
    fn healing_caps_at_max() {
        let mut stats = Stats::new();
        stats.apply_damage(50);
        stats.heal(200);
        assert_eq!(stats.health, stats.max_health);
    }

    #[test]
    fn stamina_debit_is_all_or_nothing() {
        let mut stats = Stats::new();
        stats.stamina = 15;
        assert!(!stats.use_stamina(20));
        assert_eq!(stats.stamina, 15);
        assert!(stats.use_stamina(15));
        assert_eq!(stats.stamina, 0);
    }

    #[test]
    fn regen_caps_at_max() {
        let mut stats = Stats::new();
        stats.stamina = 98;
        for _ in 0..10 {
            stats.regen_stamina();
        }
        assert_eq!(stats.stamina, stats.max_stamina);
    }
}
