//! Assembly of scanned faces into a cube state string
//!
//! Faces are keyed by their center sticker, so they can be scanned in any
//! order and a rescan replaces the earlier reading. The state string lists the
//! faces in solver facelet order U, R, F, D, L, B, nine letters each.

use log::info;

use crate::constants::cube;
use crate::notation::NotationLetter;
use crate::{Result, ScanError};

/// Collects classified faces until the whole cube has been seen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CubeStateBuilder {
    faces: [Option<[NotationLetter; 9]>; 6],
}

impl CubeStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one face, replacing any earlier scan of the same face
    ///
    /// # Returns
    ///
    /// The face the stickers were filed under (their center letter)
    pub fn record_face(&mut self, stickers: [NotationLetter; 9]) -> NotationLetter {
        let center = stickers[cube::CENTER_STICKER];
        if self.faces[center.index()].replace(stickers).is_some() {
            info!("face {} rescanned", center);
        } else {
            info!("face {} recorded", center);
        }
        center
    }

    /// Stickers recorded for a face
    pub fn face(&self, face: NotationLetter) -> Option<&[NotationLetter; 9]> {
        self.faces[face.index()].as_ref()
    }

    /// Faces not yet scanned, in facelet order
    pub fn missing_faces(&self) -> Vec<NotationLetter> {
        NotationLetter::ALL
            .into_iter()
            .filter(|f| self.faces[f.index()].is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.faces.iter().all(Option::is_some)
    }

    /// Forget every recorded face
    pub fn clear(&mut self) {
        self.faces = Default::default();
    }

    /// The 54-letter state string for the solver
    ///
    /// Each letter is one of the six notation letters. Whether the string
    /// describes a valid cube is for the solver to decide.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::IncompleteScan` listing the faces still missing.
    pub fn state_string(&self) -> Result<String> {
        let mut state = String::with_capacity(cube::STATE_LENGTH);
        for face in NotationLetter::ALL {
            let stickers = self.faces[face.index()].as_ref().ok_or_else(|| {
                ScanError::IncompleteScan {
                    missing: self.missing_faces(),
                }
            })?;
            state.extend(stickers.iter().map(|l| l.as_char()));
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_face(letter: NotationLetter) -> [NotationLetter; 9] {
        [letter; 9]
    }

    #[test]
    fn test_new_builder_is_empty() {
        let builder = CubeStateBuilder::new();
        assert!(!builder.is_complete());
        assert_eq!(builder.missing_faces(), NotationLetter::ALL.to_vec());
    }

    #[test]
    fn test_state_string_order() {
        let mut builder = CubeStateBuilder::new();
        // Scan in an order different from facelet order
        for face in [
            NotationLetter::Back,
            NotationLetter::Front,
            NotationLetter::Up,
            NotationLetter::Left,
            NotationLetter::Down,
            NotationLetter::Right,
        ] {
            builder.record_face(uniform_face(face));
        }

        assert!(builder.is_complete());
        assert_eq!(
            builder.state_string().unwrap(),
            "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB"
        );
    }

    #[test]
    fn test_record_face_keys_by_center() {
        let mut builder = CubeStateBuilder::new();
        let mut stickers = uniform_face(NotationLetter::Right);
        stickers[cube::CENTER_STICKER] = NotationLetter::Up;

        assert_eq!(builder.record_face(stickers), NotationLetter::Up);
        assert_eq!(builder.face(NotationLetter::Up), Some(&stickers));
        assert_eq!(builder.face(NotationLetter::Right), None);
    }

    #[test]
    fn test_rescan_replaces_face() {
        let mut builder = CubeStateBuilder::new();
        let mut first = uniform_face(NotationLetter::Front);
        first[0] = NotationLetter::Left;
        builder.record_face(first);
        builder.record_face(uniform_face(NotationLetter::Front));

        assert_eq!(
            builder.face(NotationLetter::Front),
            Some(&uniform_face(NotationLetter::Front))
        );
        assert_eq!(builder.missing_faces().len(), 5);
    }

    #[test]
    fn test_incomplete_state_string() {
        let mut builder = CubeStateBuilder::new();
        builder.record_face(uniform_face(NotationLetter::Up));
        builder.record_face(uniform_face(NotationLetter::Front));

        match builder.state_string() {
            Err(ScanError::IncompleteScan { missing }) => {
                assert_eq!(
                    missing,
                    vec![
                        NotationLetter::Right,
                        NotationLetter::Down,
                        NotationLetter::Left,
                        NotationLetter::Back
                    ]
                );
            }
            other => panic!("Expected IncompleteScan, got: {:?}", other),
        }
    }

    #[test]
    fn test_clear() {
        let mut builder = CubeStateBuilder::new();
        builder.record_face(uniform_face(NotationLetter::Down));
        builder.clear();
        assert_eq!(builder, CubeStateBuilder::new());
    }
}
