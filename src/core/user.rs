//! # Roster
//!
//! The users shown in the sidebar. The roster is seeded once when the room
//! is created and is display-only from then on.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub is_online: bool,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, is_online: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_online,
        }
    }
}

/// Roster used when the config file doesn't list any users.
pub fn default_roster() -> Vec<User> {
    vec![
        User::new("1", "Alice", true),
        User::new("2", "Bob", false),
        User::new("3", "Charlie", true),
    ]
}

/// Number of users currently online. Not cached; cheap enough per frame.
pub fn online_count(users: &[User]) -> usize {
    users.iter().filter(|user| user.is_online).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roster_has_two_online() {
        let users = default_roster();
        assert_eq!(users.len(), 3);
        assert_eq!(online_count(&users), 2);
    }

    #[test]
    fn online_count_empty_roster() {
        assert_eq!(online_count(&[]), 0);
    }

    #[test]
    fn online_count_tracks_flags() {
        let mut users = default_roster();
        users[1].is_online = true;
        assert_eq!(online_count(&users), 3);
        users.iter_mut().for_each(|u| u.is_online = false);
        assert_eq!(online_count(&users), 0);
    }
}
