const BUBBLE_GLARE_OFFSET: f32 = 0.8;
const BUBBLE_GLARE_START_ANGLE: f32 = 2.0;    // radians
const BUBBLE_GLARE_END_ANGLE: f32 = 2.8;

// Circular magnifier overlay region. Positions are in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bubble {
    pub radius: f32,
    pub position: (f32, f32),
    pub glare_offset: f32,
    pub glare_angle_start: f32,
    pub glare_angle_end: f32,
}

// Fixed set of bubbles shared read-only by every magnifier overlay payload.
pub struct BubbleSet {
    bubbles: Vec<Bubble>,
}

impl BubbleSet {
    pub fn reference(center_x: f32) -> Self {
        let bubble = |radius: f32, position: (f32, f32)| Bubble {
            radius,
            position,
            glare_offset: BUBBLE_GLARE_OFFSET,
            glare_angle_start: BUBBLE_GLARE_START_ANGLE,
            glare_angle_end: BUBBLE_GLARE_END_ANGLE,
        };
        Self {
            bubbles: vec![
                bubble(100.0, (center_x - 50.0, 450.0)),
                bubble(60.0, (center_x + 100.0, 300.0)),
                bubble(40.0, (center_x - 200.0, 150.0)),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    pub fn bubble(&self, index: usize) -> &Bubble {
        &self.bubbles[index]
    }

    pub fn as_slice(&self) -> &[Bubble] {
        &self.bubbles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_set_has_three_bubbles_largest_first() {
        let set = BubbleSet::reference(512.0);
        assert_eq!(set.len(), 3);
        assert_eq!(set.bubble(0).radius, 100.0);
        assert_eq!(set.bubble(1).radius, 60.0);
        assert_eq!(set.bubble(2).radius, 40.0);
    }

    #[test]
    fn bubble_positions_follow_the_surface_center() {
        let set = BubbleSet::reference(512.0);
        assert_eq!(set.bubble(0).position, (462.0, 450.0));
        assert_eq!(set.bubble(1).position, (612.0, 300.0));
        assert_eq!(set.bubble(2).position, (312.0, 150.0));
    }

    #[test]
    fn every_bubble_shares_the_glare_arc() {
        let set = BubbleSet::reference(640.0);
        for bubble in set.as_slice() {
            assert_eq!(bubble.glare_offset, 0.8);
            assert_eq!(bubble.glare_angle_start, 2.0);
            assert_eq!(bubble.glare_angle_end, 2.8);
        }
    }
}
