use crate::footprint::*;
use crate::location::*;

pub trait LayoutVisualizer {
    fn render(&mut self, footprint: &Footprint);
}

/// Renders a fixed window of the grid to text, one character per tile.
///
/// `.` is empty ground, `#` is road; buildings use a letter per kind.
/// Rows run from the lowest `z` at the top.
pub struct AsciiCanvas {
    min: TileCoord,
    width: usize,
    depth: usize,
    cells: Vec<char>,
}

impl AsciiCanvas {
    /// Canvas covering `min..=max` on both axes.
    pub fn new(min: TileCoord, max: TileCoord) -> Self {
        let width = (max.x - min.x + 1).max(0) as usize;
        let depth = (max.z - min.z + 1).max(0) as usize;
        AsciiCanvas {
            min,
            width,
            depth,
            cells: vec!['.'; width * depth],
        }
    }

    fn cell_index(&self, tile: TileCoord) -> Option<usize> {
        let dx = tile.x - self.min.x;
        let dz = tile.z - self.min.z;
        if dx < 0 || dz < 0 || dx as usize >= self.width || dz as usize >= self.depth {
            return None;
        }
        Some(dz as usize * self.width + dx as usize)
    }

    pub fn get(&self, tile: TileCoord) -> Option<char> {
        self.cell_index(tile).map(|i| self.cells[i])
    }

    pub fn to_text(&self) -> String {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn kind_char(kind: BuildingKind) -> char {
    match kind {
        BuildingKind::Road => '#',
        BuildingKind::Residential => 'R',
        BuildingKind::Commercial => 'C',
        BuildingKind::Industrial => 'I',
        BuildingKind::Civic => 'V',
        BuildingKind::Landmark => 'L',
    }
}

impl LayoutVisualizer for AsciiCanvas {
    fn render(&mut self, footprint: &Footprint) {
        let symbol = kind_char(footprint.kind);
        for tile in footprint.tiles() {
            if let Some(i) = self.cell_index(tile) {
                self.cells[i] = symbol;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlannerConfig;
    use crate::settlement::Settlement;

    #[test]
    fn renders_first_block() {
        let mut settlement = Settlement::new(PlannerConfig::default());
        settlement.place(BuildingKind::Residential, 2, 1).unwrap();

        let mut canvas = AsciiCanvas::new(TileCoord::new(0, 0), TileCoord::new(3, 3));
        for footprint in settlement.footprints() {
            canvas.render(footprint);
        }

        assert_eq!(canvas.to_text(), "####\n#RR#\n#..#\n####");
        assert_eq!(canvas.get(TileCoord::new(4, 0)), None);
    }
}
