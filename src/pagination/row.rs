//! Row renderers turn one item into the lines that represent it on a page.

use ratatui::text::Line;

use crate::error::BoxError;

/// Converts a single item into zero or more lines.
///
/// `index` is the position of the item in the whole collection, not within the page.
pub trait RowRenderer<T> {
    fn render_row(&self, item: &T, index: usize) -> Result<Vec<Line<'static>>, BoxError>;
}

impl<T, F, E> RowRenderer<T> for F
where
    F: Fn(&T, usize) -> Result<Vec<Line<'static>>, E>,
    E: Into<BoxError>,
{
    fn render_row(&self, item: &T, index: usize) -> Result<Vec<Line<'static>>, BoxError> {
        self(item, index).map_err(Into::into)
    }
}

/// Adapter for row functions that cannot fail
#[derive(Debug, Clone, Copy)]
pub struct Infallible<F>(F);

/// Wrap a row function that always succeeds
pub fn infallible<T, F>(render: F) -> Infallible<F>
where
    F: Fn(&T, usize) -> Vec<Line<'static>>,
{
    Infallible(render)
}

impl<T, F> RowRenderer<T> for Infallible<F>
where
    F: Fn(&T, usize) -> Vec<Line<'static>>,
{
    fn render_row(&self, item: &T, index: usize) -> Result<Vec<Line<'static>>, BoxError> {
        Ok((self.0)(item, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_renderer() {
        let rows = |item: &u32, index: usize| -> Result<Vec<Line<'static>>, String> {
            if *item == 0 {
                return Err("zero is not allowed".to_string());
            }
            Ok(vec![Line::from(format!("{index}: {item}"))])
        };

        let lines = RowRenderer::<u32>::render_row(&rows, &7, 3).expect("row renders");
        assert_eq!(lines, vec![Line::from("3: 7")]);

        let err = RowRenderer::<u32>::render_row(&rows, &0, 0).expect_err("zero fails");
        assert_eq!(err.to_string(), "zero is not allowed");
    }

    #[test]
    fn test_infallible_renderer_may_emit_many_lines() {
        let rows = infallible(|item: &&str, _| item.lines().map(|l| Line::from(l.to_string())).collect());
        let lines = RowRenderer::<&str>::render_row(&rows, &"a\nb", 0).expect("infallible");
        assert_eq!(lines.len(), 2);
        assert!(RowRenderer::<&str>::render_row(&rows, &"", 0)
            .expect("infallible")
            .is_empty());
    }
}
