// Copyright (c) 2025 Detective Quest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Room graph: the static binary tree of mansion rooms.
//!
//! Rooms live in an arena and refer to their children through [`RoomId`]
//! handles. The arena is filled once from a [`RoomBlueprint`] and never
//! mutated afterwards, so every handle handed out by a graph stays valid for
//! the graph's whole lifetime.
//!
//! # Example
//!
//! ```
//! use detective_quest_lib::data_structures::room_graph::{RoomGraph, Side};
//!
//! let mansion = RoomGraph::build();
//! let hall = mansion.root();
//! assert_eq!(mansion.name(hall), Some("Saguão Principal"));
//!
//! let library = mansion.child(hall, Side::Left).unwrap();
//! assert_eq!(mansion.name(library), Some("Biblioteca Antiga"));
//! ```

mod error;
mod room;

use hashbrown::HashSet;

pub use error::{RoomGraphError, RoomGraphResult};
pub use room::{Room, RoomBlueprint, RoomId, Side};

/// Immutable binary tree of rooms rooted at the mansion entrance.
#[derive(Debug, Clone)]
pub struct RoomGraph {
    /// Rooms in pre-order; the root is always at index 0
    rooms: Vec<Room>,
}

impl RoomGraph {
    /// Builds the fixed mansion.
    ///
    /// Construction is total: the fixed blueprint has unique, non-empty names.
    pub fn build() -> Self {
        Self::flatten(RoomBlueprint::mansion())
    }

    /// Builds a graph from an arbitrary blueprint.
    ///
    /// # Arguments
    ///
    /// * `blueprint` - The root room and everything below it.
    ///
    /// # Returns
    ///
    /// * `Ok(RoomGraph)` - If every room has a unique, non-blank name.
    /// * `Err(RoomGraphError)` - Otherwise.
    pub fn from_blueprint(blueprint: RoomBlueprint) -> RoomGraphResult<Self> {
        Self::check_names(&blueprint)?;
        Ok(Self::flatten(blueprint))
    }

    fn check_names(blueprint: &RoomBlueprint) -> RoomGraphResult<()> {
        let mut seen = HashSet::new();
        let mut pending = vec![blueprint];

        while let Some(room) = pending.pop() {
            if room.name.trim().is_empty() {
                return Err(RoomGraphError::EmptyName);
            }
            if !seen.insert(room.name.as_str()) {
                return Err(RoomGraphError::DuplicateName(room.name.clone()));
            }
            pending.extend(room.right.as_deref());
            pending.extend(room.left.as_deref());
        }

        Ok(())
    }

    fn flatten(blueprint: RoomBlueprint) -> Self {
        let mut rooms = Vec::new();
        let mut pending: Vec<(RoomBlueprint, Option<(RoomId, Side)>)> = vec![(blueprint, None)];

        while let Some((blueprint, parent)) = pending.pop() {
            let id = RoomId(rooms.len());
            let RoomBlueprint {
                name,
                clue,
                left,
                right,
            } = blueprint;
            rooms.push(Room::new(name, clue));

            if let Some((parent, side)) = parent {
                let parent = &mut rooms[parent.0];
                match side {
                    Side::Left => parent.left = Some(id),
                    Side::Right => parent.right = Some(id),
                }
            }

            // Right first so the left subtree is laid out directly after its parent.
            if let Some(right) = right {
                pending.push((*right, Some((id, Side::Right))));
            }
            if let Some(left) = left {
                pending.push((*left, Some((id, Side::Left))));
            }
        }

        tracing::debug!(rooms = rooms.len(), "Room graph built");
        Self { rooms }
    }

    /// The entrance of the mansion.
    pub fn root(&self) -> RoomId {
        RoomId(0)
    }

    /// Looks up a room by handle.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    /// Name of the room.
    pub fn name(&self, id: RoomId) -> Option<&str> {
        self.room(id).map(Room::name)
    }

    /// Clue of the room, `None` when the room is unknown or has no clue.
    pub fn clue(&self, id: RoomId) -> Option<&str> {
        self.room(id).and_then(Room::clue)
    }

    /// Left child of the room.
    pub fn left(&self, id: RoomId) -> Option<RoomId> {
        self.room(id).and_then(Room::left)
    }

    /// Right child of the room.
    pub fn right(&self, id: RoomId) -> Option<RoomId> {
        self.room(id).and_then(Room::right)
    }

    /// Child of the room on `side`.
    pub fn child(&self, id: RoomId, side: Side) -> Option<RoomId> {
        self.room(id).and_then(|room| room.child(side))
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Always `false` for graphs built through this API; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Walks the tree in pre-order, yielding each room with its depth.
    pub fn iter_preorder(&self) -> Preorder<'_> {
        Preorder {
            graph: self,
            pending: vec![(self.root(), 0)],
        }
    }
}

/// Pre-order walk over a [`RoomGraph`], see [`RoomGraph::iter_preorder`].
#[derive(Debug)]
pub struct Preorder<'a> {
    graph: &'a RoomGraph,
    pending: Vec<(RoomId, usize)>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (usize, &'a Room);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.pending.pop()?;
        let room = self.graph.room(id)?;
        if let Some(right) = room.right {
            self.pending.push((right, depth + 1));
        }
        if let Some(left) = room.left {
            self.pending.push((left, depth + 1));
        }
        Some((depth, room))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mansion_layout() {
        let mansion = RoomGraph::build();
        assert_eq!(mansion.len(), 7);

        let hall = mansion.root();
        assert_eq!(mansion.clue(hall), Some("Um casaco de inverno molhado no chão."));

        let library = mansion.left(hall).unwrap();
        let kitchen = mansion.right(hall).unwrap();
        assert_eq!(mansion.name(library), Some("Biblioteca Antiga"));
        assert_eq!(mansion.name(kitchen), Some("Cozinha Industrial"));

        let cellar = mansion.left(library).unwrap();
        assert_eq!(mansion.name(cellar), Some("Despensa de Vinhos"));
        let bedroom = mansion.right(library).unwrap();
        assert_eq!(mansion.name(bedroom), Some("Quarto Principal"));
        assert!(mansion.room(cellar).unwrap().is_dead_end());
        assert_eq!(mansion.left(cellar), None);
        assert_eq!(mansion.right(cellar), None);
    }

    #[test]
    fn test_mansion_blueprint_is_valid() {
        assert!(RoomGraph::from_blueprint(RoomBlueprint::mansion()).is_ok());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let blueprint = RoomBlueprint::new("Hall", "")
            .with_left(RoomBlueprint::new("Sala", "Copo quebrado"))
            .with_right(RoomBlueprint::new("Sala", "Lata caída"));

        assert_eq!(
            RoomGraph::from_blueprint(blueprint).unwrap_err(),
            RoomGraphError::DuplicateName("Sala".to_string())
        );
    }

    #[test]
    fn test_blank_name_rejected() {
        let blueprint = RoomBlueprint::new("Hall", "").with_left(RoomBlueprint::new("  ", ""));
        assert_eq!(
            RoomGraph::from_blueprint(blueprint).unwrap_err(),
            RoomGraphError::EmptyName
        );
    }

    #[test]
    fn test_preorder_walk() {
        let mansion = RoomGraph::build();
        let walk: Vec<(usize, &str)> = mansion
            .iter_preorder()
            .map(|(depth, room)| (depth, room.name()))
            .collect();

        assert_eq!(
            walk,
            vec![
                (0, "Saguão Principal"),
                (1, "Biblioteca Antiga"),
                (2, "Despensa de Vinhos"),
                (2, "Quarto Principal"),
                (1, "Cozinha Industrial"),
                (2, "Jardim de Inverno"),
                (2, "Escritório Secreto"),
            ]
        );
    }

    #[test]
    fn test_arena_is_preorder() {
        let mansion = RoomGraph::build();
        let indices: Vec<usize> = mansion
            .iter_preorder()
            .map(|(_, room)| room.name().to_string())
            .map(|name| {
                (0..mansion.len())
                    .find(|&i| mansion.name(RoomId(i)) == Some(name.as_str()))
                    .unwrap()
            })
            .collect();
        assert_eq!(indices, (0..mansion.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_unknown_handle() {
        let mansion = RoomGraph::build();
        let missing = RoomId(99);
        assert_eq!(mansion.name(missing), None);
        assert_eq!(mansion.child(missing, Side::Left), None);
    }
}
