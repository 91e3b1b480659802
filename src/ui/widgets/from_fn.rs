//! Render-function widgets

use super::{InputProps, InputWidget};
use ratatui::{layout::Rect, Frame};
use std::marker::PhantomData;

/// A widget made from a render function. It never consumes keys.
pub struct FnWidget<F, P> {
    render: F,
    height: u16,
    _props: PhantomData<fn() -> P>,
}

/// Adapt `render` into an [`InputWidget`] with props of type `P`
pub fn from_fn<P, F>(render: F) -> FnWidget<F, P>
where
    F: Fn(&mut Frame, Rect, InputProps<'_, P>) + 'static,
{
    FnWidget {
        render,
        height: 1,
        _props: PhantomData,
    }
}

impl<F, P> FnWidget<F, P> {
    pub fn with_height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }
}

impl<F, P> InputWidget for FnWidget<F, P>
where
    F: Fn(&mut Frame, Rect, InputProps<'_, P>) + 'static,
    P: 'static,
{
    type Props = P;

    fn height(&self, _props: &P) -> u16 {
        self.height
    }

    fn render(&self, frame: &mut Frame, area: Rect, input: InputProps<'_, P>) {
        (self.render)(frame, area, input);
    }
}
