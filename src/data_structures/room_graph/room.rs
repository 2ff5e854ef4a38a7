// Copyright (c) 2025 Detective Quest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Room nodes and blueprints for the room graph.
//!
//! A [`RoomBlueprint`] is a plain value tree: every child is owned by exactly one
//! parent, so a blueprint can never describe a cycle or a shared room. The graph
//! flattens it into an arena of [`Room`]s addressed by [`RoomId`].

/// Stable handle to a room inside a [`RoomGraph`](super::RoomGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub(crate) usize);

impl RoomId {
    /// Position of the room in the graph's arena (pre-order).
    pub fn index(self) -> usize {
        self.0
    }
}

/// Which child of a room to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left child
    Left,
    /// The right child
    Right,
}

/// A single room of the mansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Unique name of the room
    pub(crate) name: String,

    /// Clue text; empty when the room holds no clue
    pub(crate) clue: String,

    /// Left child, if any
    pub(crate) left: Option<RoomId>,

    /// Right child, if any
    pub(crate) right: Option<RoomId>,
}

impl Room {
    pub(crate) fn new(name: String, clue: String) -> Self {
        Self {
            name,
            clue,
            left: None,
            right: None,
        }
    }

    /// The room's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The clue found in this room, or `None` when the room has nothing to collect.
    pub fn clue(&self) -> Option<&str> {
        if self.clue.is_empty() {
            None
        } else {
            Some(&self.clue)
        }
    }

    /// The left child.
    pub fn left(&self) -> Option<RoomId> {
        self.left
    }

    /// The right child.
    pub fn right(&self) -> Option<RoomId> {
        self.right
    }

    /// The child on the given side.
    pub fn child(&self, side: Side) -> Option<RoomId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Whether the room has no way forward.
    pub fn is_dead_end(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Declarative description of a room and the rooms below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomBlueprint {
    /// Name of the room
    pub name: String,

    /// Clue text (empty for none)
    pub clue: String,

    /// Room reached by going left
    pub left: Option<Box<RoomBlueprint>>,

    /// Room reached by going right
    pub right: Option<Box<RoomBlueprint>>,
}

impl RoomBlueprint {
    /// Creates a blueprint for a room with no children.
    pub fn new<N, C>(name: N, clue: C) -> Self
    where
        N: Into<String>,
        C: Into<String>,
    {
        Self {
            name: name.into(),
            clue: clue.into(),
            left: None,
            right: None,
        }
    }

    /// Attaches `child` as the left room.
    pub fn with_left(mut self, child: RoomBlueprint) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    /// Attaches `child` as the right room.
    pub fn with_right(mut self, child: RoomBlueprint) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    /// The fixed mansion layout.
    ///
    /// ```text
    ///                     Saguão Principal
    ///                   /                  \
    ///        Biblioteca Antiga          Cozinha Industrial
    ///          /          \               /            \
    ///  Despensa de       Quarto      Jardim de       Escritório
    ///  Vinhos            Principal   Inverno         Secreto
    /// ```
    pub fn mansion() -> Self {
        let library = RoomBlueprint::new(
            "Biblioteca Antiga",
            "Restos de charuto de alta qualidade (aponta para Alfredo).",
        )
        .with_left(RoomBlueprint::new(
            "Despensa de Vinhos",
            "Uma garrafa de vinho tinto de safra rara, quase vazia (aponta para Alfredo).",
        ))
        .with_right(RoomBlueprint::new(
            "Quarto Principal",
            "Um frasco de perfume caro e vazio.",
        ));

        let kitchen = RoomBlueprint::new(
            "Cozinha Industrial",
            "Uma faca de cozinha usada e jogada na pia (aponta para Carlos).",
        )
        .with_left(RoomBlueprint::new(
            "Jardim de Inverno",
            "Um par de sapatos enlameados na entrada (aponta para Carlos).",
        ))
        .with_right(RoomBlueprint::new(
            "Escritório Secreto",
            "Um fio de cabelo loiro em cima da mesa (aponta para Berta).",
        ));

        RoomBlueprint::new("Saguão Principal", "Um casaco de inverno molhado no chão.")
            .with_left(library)
            .with_right(kitchen)
    }
}
