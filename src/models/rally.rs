// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Rally notation parsing.
//!
//! A saved line describes one rally, read left to right:
//!
//! - `1`..`4` name players; 1 and 2 are the home team, 3 and 4 away.
//! - The rally opens with the server, then `n` (missed serve), `a` plus an
//!   opponent (ace), or the opponent who received the serve.
//! - Every later touch is the target of the ball, optionally prefixed by
//!   `s` (strong), `w` (weak) or `e` (a touch that later costs the point).
//! - `n` ends the rally with a failed touch, `p` with a spike that was not
//!   returned.
//!
//! `1343121p` reads: 1 serves to 3, 3 passes to 4, 4 sets 3, 3 spikes on 1,
//! 1 passes to 2, 2 sets 1, 1 spikes for the point.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four player positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slot {
    P1,
    P2,
    P3,
    P4,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::P1, Slot::P2, Slot::P3, Slot::P4];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Slot::P1),
            '2' => Some(Slot::P2),
            '3' => Some(Slot::P3),
            '4' => Some(Slot::P4),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Slot::P1 => 0,
            Slot::P2 => 1,
            Slot::P3 => 2,
            Slot::P4 => 3,
        }
    }

    pub fn team(self) -> Team {
        match self {
            Slot::P1 | Slot::P2 => Team::Home,
            Slot::P3 | Slot::P4 => Team::Away,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.index() + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Home,
    Away,
}

impl Team {
    pub fn other(self) -> Team {
        match self {
            Team::Home => Team::Away,
            Team::Away => Team::Home,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchKind {
    Service,
    Defense,
    Set,
    Spike,
}

impl TouchKind {
    /// Kind expected for the next touch by the receiving player.
    fn next(self) -> TouchKind {
        match self {
            TouchKind::Service => TouchKind::Defense,
            TouchKind::Defense => TouchKind::Set,
            TouchKind::Set => TouchKind::Spike,
            TouchKind::Spike => TouchKind::Defense,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Strong,
    Weak,
}

/// Marks a touch that was legal to record but flawed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchFault {
    /// The touch leads to the loss of the point later on
    FutureMistake,
    DoubleTouch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Touch {
    pub kind: TouchKind,
    pub actor: Slot,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Slot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<Strength>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub ace: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<TouchFault>,
}

impl Touch {
    fn new(kind: TouchKind, actor: Slot) -> Self {
        Self {
            kind,
            actor,
            success: true,
            target: None,
            strength: None,
            ace: false,
            fault: None,
        }
    }

    fn failed(kind: TouchKind, actor: Slot) -> Self {
        Self {
            success: false,
            ..Self::new(kind, actor)
        }
    }

    fn to(mut self, target: Slot) -> Self {
        self.target = Some(target);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RallyError {
    #[error("rally is empty")]
    Empty,

    #[error("rally ends before touch {0} is complete")]
    UnexpectedEnd(usize),

    #[error("unexpected '{found}' at position {position}")]
    InvalidChar { found: char, position: usize },

    #[error("touches recorded after the end of play at position {0}")]
    PastEndOfPlay(usize),

    #[error("player {0} cannot ace a teammate")]
    AceTeammate(Slot),

    #[error("player {0} cannot spike on a teammate")]
    SpikeTeammate(Slot),
}

/// A saved line together with its parsed touches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rally {
    pub notation: String,
    pub touches: Vec<Touch>,
}

impl Rally {
    pub fn parse(notation: &str) -> Result<Self, RallyError> {
        Ok(Self {
            notation: notation.to_string(),
            touches: parse_rally(notation)?,
        })
    }

    /// The opening serve.
    pub fn first(&self) -> Option<&Touch> {
        self.touches.first()
    }

    /// The touch that decided the point.
    pub fn last(&self) -> Option<&Touch> {
        self.touches.last()
    }
}

/// Character cursor that reports positions for error messages.
struct Cursor<'a> {
    chars: std::iter::Peekable<std::iter::Enumerate<std::str::Chars<'a>>>,
    touches: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().enumerate().peekable(),
            touches: 0,
        }
    }

    fn advance(&mut self) -> Result<(usize, char), RallyError> {
        self.chars
            .next()
            .ok_or(RallyError::UnexpectedEnd(self.touches + 1))
    }

    fn player(&mut self) -> Result<Slot, RallyError> {
        let (position, found) = self.advance()?;
        Slot::from_char(found).ok_or(RallyError::InvalidChar { found, position })
    }

    fn is_done(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    /// A terminal touch must be the last character of the rally.
    fn finish(&mut self) -> Result<(), RallyError> {
        match self.chars.peek() {
            Some(&(position, _)) => Err(RallyError::PastEndOfPlay(position)),
            None => Ok(()),
        }
    }
}

/// Parse one rally into its touches.
pub fn parse_rally(text: &str) -> Result<Vec<Touch>, RallyError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(RallyError::Empty);
    }

    let mut cursor = Cursor::new(text);
    let mut touches = Vec::new();

    // Service
    let server = cursor.player()?;
    let (position, modifier) = cursor.advance()?;
    let mut focus = match modifier {
        'n' => {
            touches.push(Touch::failed(TouchKind::Service, server));
            cursor.finish()?;
            return Ok(touches);
        }
        'a' => {
            let target = cursor.player()?;
            if target.team() == server.team() {
                return Err(RallyError::AceTeammate(server));
            }
            let mut ace = Touch::new(TouchKind::Service, server).to(target);
            ace.ace = true;
            touches.push(ace);
            cursor.finish()?;
            return Ok(touches);
        }
        c => match Slot::from_char(c) {
            Some(target) if target.team() != server.team() => {
                touches.push(Touch::new(TouchKind::Service, server).to(target));
                target
            }
            _ => return Err(RallyError::InvalidChar { found: c, position }),
        },
    };
    cursor.touches = touches.len();
    let mut expected = TouchKind::Defense;

    while !cursor.is_done() {
        let (position, modifier) = cursor.advance()?;

        match modifier {
            'n' => {
                let kind = if expected == TouchKind::Defense {
                    TouchKind::Defense
                } else {
                    TouchKind::Spike
                };
                touches.push(Touch::failed(kind, focus));
                cursor.finish()?;
                break;
            }
            'p' => {
                touches.push(Touch::new(TouchKind::Spike, focus));
                cursor.finish()?;
                break;
            }
            _ => {}
        }

        let mut strength = None;
        let mut fault = None;
        let target = match modifier {
            's' | 'w' => {
                strength = Some(if modifier == 's' {
                    Strength::Strong
                } else {
                    Strength::Weak
                });
                cursor.player()?
            }
            'e' => {
                let (position, found) = cursor.advance()?;
                match Slot::from_char(found) {
                    Some(target) if target.team() == focus.team() => {
                        fault = Some(TouchFault::FutureMistake);
                        target
                    }
                    _ => return Err(RallyError::InvalidChar { found, position }),
                }
            }
            c => Slot::from_char(c).ok_or(RallyError::InvalidChar { found: c, position })?,
        };

        let same_team = target.team() == focus.team();
        if same_team && expected == TouchKind::Spike {
            if target == focus {
                fault = Some(TouchFault::DoubleTouch);
            } else {
                return Err(RallyError::SpikeTeammate(focus));
            }
        }

        let kind = if same_team { expected } else { TouchKind::Spike };
        let mut touch = Touch::new(kind, focus).to(target);
        touch.strength = strength;
        touch.fault = fault;
        touches.push(touch);

        focus = target;
        expected = kind.next();
        cursor.touches = touches.len();
    }

    Ok(touches)
}
