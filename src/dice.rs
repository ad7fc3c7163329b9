use rand::Rng;

use crate::config::{DICE_PER_HAND, FACES};

/// One participant's hand: five dice, fixed once rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct DiceSet([u8; DICE_PER_HAND]);

impl DiceSet {
    /// Roll a fresh hand, each die uniform over `1..=FACES`.
    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        let mut faces = [0u8; DICE_PER_HAND];
        for face in faces.iter_mut() {
            *face = rng.random_range(1..=FACES);
        }
        Self(faces)
    }

    /// Build a hand from known faces. Returns `None` if any face is outside `1..=FACES`.
    pub fn from_faces(faces: [u8; DICE_PER_HAND]) -> Option<Self> {
        if faces.iter().all(|&f| (1..=FACES).contains(&f)) {
            Some(Self(faces))
        } else {
            None
        }
    }

    pub fn faces(&self) -> &[u8; DICE_PER_HAND] {
        &self.0
    }

    /// Number of dice showing `face`. Ones are not wild.
    pub fn count(&self, face: u8) -> usize {
        self.0.iter().filter(|&&f| f == face).count()
    }
}

impl core::fmt::Display for DiceSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, face) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", face)?;
        }
        Ok(())
    }
}
