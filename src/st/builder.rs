use crate::core::HistogramBackend;
use crate::st::factory::HistogramFactory;
use std::marker::PhantomData;

const DEFAULT_PREFIX: &str = "h";

pub enum Buildable {}
pub enum NeedsBackend {}

struct BuilderState<B> {
    prefix: Option<String>,
    loop_colors: bool,
    backend: Option<B>,
}

impl<B> BuilderState<B> {
    fn new() -> BuilderState<B> {
        BuilderState {
            prefix: None,
            loop_colors: true,
            backend: None,
        }
    }
}

pub struct FactoryBuilder<B, S> {
    state: BuilderState<B>,
    phantom: PhantomData<S>,
}

pub fn builder<B: HistogramBackend>() -> FactoryBuilder<B, NeedsBackend> {
    FactoryBuilder {
        state: BuilderState::new(),
        phantom: PhantomData,
    }
}

impl<B: HistogramBackend, S> FactoryBuilder<B, S> {
    pub fn prefix<P: Into<String>>(mut self, prefix: P) -> FactoryBuilder<B, S> {
        self.state.prefix = Some(prefix.into());
        self
    }

    pub fn loop_colors(mut self, onoff: bool) -> FactoryBuilder<B, S> {
        self.state.loop_colors = onoff;
        self
    }

    pub fn backend(mut self, backend: B) -> FactoryBuilder<B, Buildable> {
        self.state.backend = Some(backend);
        FactoryBuilder { state: self.state, phantom: PhantomData }
    }
}

impl<B: HistogramBackend> FactoryBuilder<B, Buildable> {
    pub fn build(self) -> HistogramFactory<B> {
        let state = self.state;
        let backend = match state.backend {
            Some(backend) => backend,
            None => unreachable!("backend is set before the builder becomes buildable"),
        };
        let prefix = state.prefix.unwrap_or_else(|| DEFAULT_PREFIX.to_string());
        let mut factory = HistogramFactory::new(prefix, backend);
        factory.set_loop_colors(state.loop_colors);
        factory
    }
}
