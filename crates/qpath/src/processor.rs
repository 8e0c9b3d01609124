use crate::{Emitter, Error};
use qpath_build::generate;
use qpath_config_build::Settings;
use qpath_schema::prelude::*;
use tracing::{debug, info};

///
/// PassReport
///
/// What one `finish` call produced.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PassReport {
    pub candidates: usize,

    /// Qualified names of the generated classes, in emission order.
    pub generated: Vec<String>,

    pub diagnostics: Vec<Diagnostic>,
}

///
/// Processor
///
/// Drives one generation pass at a time. The host hands over declarations
/// with [`Processor::process`], possibly over several rounds, and
/// [`Processor::finish`] assembles, renders and emits everything collected so
/// far. Nothing carries over into the next pass.
///

pub struct Processor<E> {
    settings: Settings,
    naming: Naming,
    policy: InclusionPolicy,
    pending: Vec<Declaration>,
    emitter: E,
}

impl<E: Emitter> Processor<E> {
    pub fn new(mut settings: Settings, emitter: E) -> Result<Self, Error> {
        settings.normalize();
        settings.validate()?;

        Ok(Self {
            naming: settings.naming(),
            policy: settings.policy(),
            settings,
            pending: Vec::new(),
            emitter,
        })
    }

    /// Queue the declarations the inclusion policy admits; returns how many.
    pub fn process<I>(&mut self, declarations: I) -> usize
    where
        I: IntoIterator<Item = Declaration>,
    {
        if !self.settings.enable {
            debug!("generation disabled; ignoring declarations");
            return 0;
        }

        let selected = self.policy.select(declarations);
        let count = selected.len();
        self.pending.extend(selected);

        count
    }

    /// Finish the pass. Every model is assembled and rendered before the
    /// first file reaches the emitter.
    pub fn finish(&mut self) -> Result<PassReport, Error> {
        let candidates = std::mem::take(&mut self.pending);
        let candidate_count = candidates.len();

        let Assembly { graph, diagnostics } = assemble(candidates, &self.naming);
        let files = generate(&graph, &self.settings.indent);

        let mut generated = Vec::with_capacity(files.len());
        for file in files {
            let name = if file.package.is_empty() {
                file.name.clone()
            } else {
                format!("{}.{}", file.package, file.name)
            };

            debug!(file = %name, sources = file.originating.len(), "emitting");
            self.emitter.emit(file)?;
            generated.push(name);
        }

        info!(
            candidates = candidate_count,
            generated = generated.len(),
            diagnostics = diagnostics.len(),
            "query path pass finished"
        );

        Ok(PassReport {
            candidates: candidate_count,
            generated,
            diagnostics,
        })
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub const fn emitter(&self) -> &E {
        &self.emitter
    }

    #[must_use]
    pub fn into_emitter(self) -> E {
        self.emitter
    }
}

///
/// TESTS
///
