//! Team building.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::natures::Nature;
use crate::stats::MAX_IV;

/// Maximum team size.
pub const MAX_TEAM_SIZE: usize = 6;

/// Maximum move slots per team member.
pub const MAX_MOVES: usize = 4;

/// Identifier of a team within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u64);

/// One configured Pokémon on a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub species: String,
    pub nickname: Option<String>,
    pub level: u8,
    pub nature: Nature,
    pub ivs: [u8; 6],
    pub evs: [u8; 6],
    pub moves: Vec<String>,
}

impl TeamMember {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            nickname: None,
            level: 50,
            nature: Nature::default(),
            ivs: [MAX_IV; 6],
            evs: [0; 6],
            moves: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    members: Vec<TeamMember>,
}

impl Team {
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_TEAM_SIZE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamError {
    #[error("team not found")]
    TeamNotFound,
    #[error("team already has {MAX_TEAM_SIZE} members")]
    TeamFull,
    #[error("a member may know at most {MAX_MOVES} moves, got {0}")]
    TooManyMoves(usize),
    #[error("member index {0} out of bounds")]
    MemberOutOfBounds(usize),
}

/// All teams in the store.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teams {
    teams: Vec<Team>,
    next_team_id: u64,
}

impl Teams {
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    fn team_mut(&mut self, id: TeamId) -> Result<&mut Team, TeamError> {
        self.teams
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TeamError::TeamNotFound)
    }

    pub fn create_team(&mut self, name: impl Into<String>) -> TeamId {
        let id = TeamId(self.next_team_id);
        self.next_team_id += 1;
        self.teams.push(Team {
            id,
            name: name.into(),
            members: Vec::new(),
        });
        id
    }

    pub fn rename_team(&mut self, id: TeamId, name: impl Into<String>) -> Result<(), TeamError> {
        self.team_mut(id)?.name = name.into();
        Ok(())
    }

    /// Returns whether the team existed.
    pub fn delete_team(&mut self, id: TeamId) -> bool {
        let before = self.teams.len();
        self.teams.retain(|t| t.id != id);
        self.teams.len() != before
    }

    pub fn add_member(&mut self, id: TeamId, member: TeamMember) -> Result<(), TeamError> {
        if member.moves.len() > MAX_MOVES {
            return Err(TeamError::TooManyMoves(member.moves.len()));
        }
        let team = self.team_mut(id)?;
        if team.is_full() {
            return Err(TeamError::TeamFull);
        }
        team.members.push(member);
        Ok(())
    }

    pub fn remove_member(&mut self, id: TeamId, index: usize) -> Result<TeamMember, TeamError> {
        let team = self.team_mut(id)?;
        if index >= team.members.len() {
            return Err(TeamError::MemberOutOfBounds(index));
        }
        Ok(team.members.remove(index))
    }

    /// Move the member at `from` so it ends up at `to`, shifting the others.
    pub fn reorder_member(&mut self, id: TeamId, from: usize, to: usize) -> Result<(), TeamError> {
        let team = self.team_mut(id)?;
        let len = team.members.len();
        if from >= len {
            return Err(TeamError::MemberOutOfBounds(from));
        }
        if to >= len {
            return Err(TeamError::MemberOutOfBounds(to));
        }
        let member = team.members.remove(from);
        team.members.insert(to, member);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_delete() {
        let mut teams = Teams::default();
        let id = teams.create_team("Rain team");
        assert_eq!(teams.team(id).unwrap().name, "Rain team");

        teams.rename_team(id, "Sun team").unwrap();
        assert_eq!(teams.team(id).unwrap().name, "Sun team");

        assert!(teams.delete_team(id));
        assert!(!teams.delete_team(id));
        assert_eq!(teams.rename_team(id, "x"), Err(TeamError::TeamNotFound));
    }

    #[test]
    fn test_team_size_cap() {
        let mut teams = Teams::default();
        let id = teams.create_team("Full team");
        for i in 0..MAX_TEAM_SIZE {
            teams.add_member(id, TeamMember::new(format!("mon-{i}"))).unwrap();
        }
        assert!(teams.team(id).unwrap().is_full());
        assert_eq!(
            teams.add_member(id, TeamMember::new("one-too-many")),
            Err(TeamError::TeamFull)
        );
    }

    #[test]
    fn test_move_slot_cap() {
        let mut teams = Teams::default();
        let id = teams.create_team("team");
        let mut member = TeamMember::new("pikachu");
        member.moves = vec![
            "thunderbolt".into(),
            "surf".into(),
            "protect".into(),
            "volt switch".into(),
            "iron tail".into(),
        ];
        assert_eq!(
            teams.add_member(id, member),
            Err(TeamError::TooManyMoves(5))
        );
    }

    #[test]
    fn test_reorder() {
        let mut teams = Teams::default();
        let id = teams.create_team("team");
        for species in ["a", "b", "c"] {
            teams.add_member(id, TeamMember::new(species)).unwrap();
        }

        teams.reorder_member(id, 0, 2).unwrap();
        let order: Vec<_> = teams
            .team(id)
            .unwrap()
            .members()
            .iter()
            .map(|m| m.species.as_str())
            .collect();
        assert_eq!(order, vec!["b", "c", "a"]);

        assert_eq!(
            teams.reorder_member(id, 5, 0),
            Err(TeamError::MemberOutOfBounds(5))
        );
    }

    #[test]
    fn test_remove_member() {
        let mut teams = Teams::default();
        let id = teams.create_team("team");
        teams.add_member(id, TeamMember::new("bulbasaur")).unwrap();

        let removed = teams.remove_member(id, 0).unwrap();
        assert_eq!(removed.species, "bulbasaur");
        assert_eq!(
            teams.remove_member(id, 0),
            Err(TeamError::MemberOutOfBounds(0))
        );
    }
}
