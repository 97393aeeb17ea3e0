//! Text rendering of grids with a highlighted path.

use amaze_core::MazePath;

use crate::grid::{Cell, GridMaze};

impl GridMaze {
    /// Renders the grid, marking `path` cells other than the endpoints with
    /// `*`.
    ///
    /// # Examples
    /// ```
    /// use amaze_core::{MazePath, NodeId};
    /// use amaze_providers_grid::GridMaze;
    ///
    /// let maze = GridMaze::try_from_str("demo", "S..\n##G\n")?;
    /// let path = MazePath::try_from_nodes(vec![
    ///     NodeId::new(0),
    ///     NodeId::new(1),
    ///     NodeId::new(2),
    ///     NodeId::new(5),
    /// ])?;
    /// assert_eq!(maze.render_with_path(&path), "S**\n##G\n");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn render_with_path(&self, path: &MazePath) -> String {
        let mut glyphs: Vec<char> = self
            .cells()
            .iter()
            .map(|cell| match cell {
                Cell::Wall => '#',
                Cell::Open => '.',
                Cell::Goal => 'G',
            })
            .collect();
        for node in path.nodes() {
            if let Some(glyph) = glyphs.get_mut(node.get()) {
                if *glyph == '.' {
                    *glyph = '*';
                }
            }
        }
        if let Some(glyph) = glyphs.get_mut(self.start().get()) {
            *glyph = 'S';
        }

        let mut out = String::with_capacity(glyphs.len() + self.height());
        for row in glyphs.chunks(self.width()) {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}
