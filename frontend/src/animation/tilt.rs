/// Bounding box of the tilted element in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer offset from the element centre, scaled down to a tilt angle in
/// degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub x: f64,
    pub y: f64,
}

impl Tilt {
    pub fn from_pointer(client_x: f64, client_y: f64, rect: ElementBox, divisor: f64) -> Self {
        Self {
            x: (client_x - rect.left - rect.width / 2.0) / divisor,
            y: (client_y - rect.top - rect.height / 2.0) / divisor,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "transform: perspective(1000px) rotateY({}deg) rotateX({}deg); transition: transform 0.1s ease-out;",
            self.x, -self.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: ElementBox = ElementBox {
        left: 100.0,
        top: 50.0,
        width: 320.0,
        height: 320.0,
    };

    #[test]
    fn centre_is_flat() {
        assert_eq!(Tilt::from_pointer(260.0, 210.0, BOX, 20.0), Tilt::default());
    }

    #[test]
    fn corners_are_bounded_by_divisor() {
        let tilt = Tilt::from_pointer(100.0, 370.0, BOX, 20.0);
        assert_eq!(tilt, Tilt { x: -8.0, y: 8.0 });
    }

    #[test]
    fn transform_inverts_vertical_axis() {
        let tilt = Tilt { x: 2.0, y: 3.0 };
        assert!(tilt.transform().contains("rotateY(2deg) rotateX(-3deg)"));
    }
}
