//! Mounting a cloth into a host, stepping it per frame, and tearing it down.

use crate::cloth::Cloth;
use crate::config::ClothConfig;
use crate::context::{MeshDesc, SimulationContext, StepHandle};
use crate::error::ClothError;
use crate::float::Float;
use crate::material::Phong;
use crate::mesh::MeshSync;
use crate::observer::{StepObserver, TracingObserver};

/// Lifecycle of a [`ClothSimulation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No camera was available at mount; nothing was allocated.
    Uninitialized,
    /// Cloth built, not yet receiving frames.
    Initialized,
    /// Registered with the host and stepping.
    Running,
    /// Unregistered and released. Frames are ignored.
    Disposed,
}

struct Mounted<F: Float, M> {
    cloth: Cloth<F>,
    cloth_mesh: M,
    pole_mesh: M,
    step: Option<StepHandle>,
}

/// A cloth attached to a host render loop.
///
/// Everything created in [`mount`](Self::mount) is released by
/// [`dispose`](Self::dispose), which also runs on drop.
pub struct ClothSimulation<F: Float, C: SimulationContext<F>> {
    context: C,
    phase: Phase,
    mounted: Option<Mounted<F, C::Mesh>>,
    observer: TracingObserver,
}

impl<F: Float, C: SimulationContext<F>> ClothSimulation<F, C> {
    /// Build the cloth, create its meshes and register for frames.
    ///
    /// Without a camera the simulation stays inert in
    /// [`Phase::Uninitialized`]. Pin indices are checked before anything is
    /// allocated, so an error leaves the host untouched.
    pub fn mount(context: C, config: &ClothConfig<F>) -> Result<Self, ClothError> {
        let mut sim = Self::new(context, config)?;
        sim.start();
        Ok(sim)
    }

    /// Build the cloth and create its meshes without registering for
    /// frames. The result is [`Phase::Initialized`], or
    /// [`Phase::Uninitialized`] when the host has no camera.
    pub fn new(mut context: C, config: &ClothConfig<F>) -> Result<Self, ClothError> {
        if context.camera().is_none() {
            tracing::debug!("no camera available, cloth stays inert");
            return Ok(ClothSimulation {
                context,
                phase: Phase::Uninitialized,
                mounted: None,
                observer: TracingObserver::new(),
            });
        }

        let cloth = Cloth::from_config(config)?;

        let material = config.material();
        let rest = cloth.positions();
        let cloth_mesh = context.create_mesh(MeshDesc::Cloth {
            rest_positions: &rest,
            width_segments: config.width_segments,
            height_segments: config.height_segments,
            material: &material,
            phong: Phong::cloth(),
        });
        let pole = *cloth.pole();
        let pole_mesh = context.create_mesh(MeshDesc::Pole {
            center: pole.center,
            thickness: config.pole_thickness(),
            height: pole.height,
            phong: Phong::pole(),
        });

        tracing::debug!(
            width_segments = config.width_segments,
            height_segments = config.height_segments,
            particles = cloth.particle_count(),
            constraints = cloth.constraint_count(),
            pins = cloth.pins().len(),
            textured = material.is_textured(),
            "cloth initialized"
        );

        Ok(ClothSimulation {
            context,
            phase: Phase::Initialized,
            mounted: Some(Mounted { cloth, cloth_mesh, pole_mesh, step: None }),
            observer: TracingObserver::new(),
        })
    }

    /// Register with the host clock. Only acts once, from
    /// [`Phase::Initialized`].
    pub fn start(&mut self) {
        if self.phase != Phase::Initialized {
            return;
        }
        if let Some(mounted) = self.mounted.as_mut() {
            let handle = self.context.register_step();
            mounted.step = Some(handle);
            self.phase = Phase::Running;
            tracing::debug!(?handle, "cloth registered for frames");
        }
    }

    /// Step once for a frame delivered by the host clock.
    ///
    /// Returns `false` when the frame was ignored: the simulation is not
    /// running, or the camera went away.
    pub fn on_frame(&mut self, elapsed_millis: F) -> bool {
        let mut observer = core::mem::take(&mut self.observer);
        let stepped = self.on_frame_observed(elapsed_millis, &mut observer);
        self.observer = observer;
        stepped
    }

    /// [`on_frame`](Self::on_frame) with a caller-supplied observer.
    pub fn on_frame_observed<O: StepObserver<F>>(&mut self, elapsed_millis: F, observer: &mut O) -> bool {
        let mounted = match (self.phase, self.mounted.as_mut()) {
            (Phase::Running, Some(mounted)) => mounted,
            (phase, _) => {
                tracing::warn!(?phase, "frame ignored");
                return false;
            }
        };

        let camera = match self.context.camera() {
            Some(camera) => camera,
            None => {
                tracing::warn!("camera lost, frame skipped");
                return false;
            }
        };
        let orientation = self.context.parent_orientation();

        mounted.cloth.step(elapsed_millis, &camera, orientation, observer);
        MeshSync::write(mounted.cloth.grid().particles(), &mut mounted.cloth_mesh);
        true
    }

    /// Unregister and release everything. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.phase == Phase::Disposed {
            return;
        }
        if let Some(mounted) = self.mounted.take() {
            if let Some(handle) = mounted.step {
                self.context.unregister_step(handle);
            }
            self.context.release_mesh(mounted.cloth_mesh);
            self.context.release_mesh(mounted.pole_mesh);
            tracing::debug!(steps = self.observer.steps(), "cloth disposed");
        }
        self.phase = Phase::Disposed;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The running cloth, if any.
    pub fn cloth(&self) -> Option<&Cloth<F>> {
        self.mounted.as_ref().map(|m| &m.cloth)
    }

    pub fn step_handle(&self) -> Option<StepHandle> {
        self.mounted.as_ref().and_then(|m| m.step)
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }
}

impl<F: Float, C: SimulationContext<F>> Drop for ClothSimulation<F, C> {
    fn drop(&mut self) {
        self.dispose();
    }
}
