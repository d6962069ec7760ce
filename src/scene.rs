use crate::config::{
    DEFAULT_ASPECT_RATIO, FIGURES_EYE, FIGURES_FAR_PLANE, FIGURES_FOV_DEGREES, FIGURES_NEAR_PLANE,
    FIGURES_ROTATION_STEP, LIGHTING_EYE, LIGHTING_FAR_PLANE, LIGHTING_FOV_DEGREES,
    LIGHTING_NEAR_PLANE, LIGHTING_ROTATION_STEP, MAX_FIGURES, PLACEMENT_OFFSET_X,
    SCENE_BACKGROUND, SPHERE_SUBDIVISIONS, TETRA_BACKGROUND, TETRA_EYE, TETRA_FAR_PLANE,
    TETRA_FOV_DEGREES, TETRA_NEAR_PLANE,
};
use crate::objects::Point;
use crate::objects::camera::Camera;
use crate::objects::figure::{Figure, FigureKind};
use crate::objects::light::{LightAnimation, LightRig};
use crate::objects::mesh::Mesh;
use image::Rgb;
use nalgebra::Vector3;
use std::fmt;

/// Errors surfaced to the user through the alert window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The figure list is already at its cap.
    TooManyFigures,
    /// The selected slot has no figure in it yet.
    FigureNotCreated(usize),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::TooManyFigures => {
                write!(f, "You can't add more than {MAX_FIGURES} objects")
            }
            SceneError::FigureNotCreated(index) => {
                write!(f, "Object on position {index} is not created yet")
            }
        }
    }
}

impl std::error::Error for SceneError {}

/// A renderable demo scene: camera, optional lighting and up to
/// [`MAX_FIGURES`] figures.
pub struct Scene {
    pub camera: Camera,
    pub lighting: Option<LightRig>,
    pub background: Rgb<u8>,
    figures: Vec<Figure>,
    rotation_step: f32,
    light_animation: Option<LightAnimation>,
}

impl Scene {
    /// Unlit figure scene: black background, camera above and in front.
    pub fn figures_demo() -> Self {
        Self {
            camera: Camera::new(
                Point::from(FIGURES_EYE),
                FIGURES_FOV_DEGREES,
                DEFAULT_ASPECT_RATIO,
                FIGURES_NEAR_PLANE,
                FIGURES_FAR_PLANE,
            ),
            lighting: None,
            background: SCENE_BACKGROUND,
            figures: Vec::new(),
            rotation_step: FIGURES_ROTATION_STEP,
            light_animation: None,
        }
    }

    /// Lit figure scene: same figure handling, but every vertex goes through
    /// the three-term shading and the camera sits further out.
    pub fn lighting_demo() -> Self {
        Self {
            camera: Camera::new(
                Point::from(LIGHTING_EYE),
                LIGHTING_FOV_DEGREES,
                DEFAULT_ASPECT_RATIO,
                LIGHTING_NEAR_PLANE,
                LIGHTING_FAR_PLANE,
            ),
            lighting: Some(LightRig::standard()),
            background: SCENE_BACKGROUND,
            figures: Vec::new(),
            rotation_step: LIGHTING_ROTATION_STEP,
            light_animation: None,
        }
    }

    /// Tetrahedron scene: a single subdivided sphere on a white background
    /// with an animated point light.
    pub fn tetra_demo() -> Self {
        let mut scene = Self {
            camera: Camera::new(
                Point::from(TETRA_EYE),
                TETRA_FOV_DEGREES,
                DEFAULT_ASPECT_RATIO,
                TETRA_NEAR_PLANE,
                TETRA_FAR_PLANE,
            ),
            lighting: Some(LightRig::tetra()),
            background: TETRA_BACKGROUND,
            figures: Vec::new(),
            rotation_step: 0.0,
            light_animation: Some(LightAnimation::PolarOrbit),
        };
        scene.figures.push(Figure::new(Mesh::sphere(SPHERE_SUBDIVISIONS)));
        scene
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Adds a figure of the requested kind. The slot it lands in fixes its
    /// default placement: first to the left, third to the right, the middle
    /// one stays centered.
    pub fn add_figure(&mut self, kind: FigureKind) -> Result<(), SceneError> {
        if self.figures.len() >= MAX_FIGURES {
            return Err(SceneError::TooManyFigures);
        }

        let mut figure = Figure::new(Mesh::for_kind(kind));
        figure.set_default_placement(match self.figures.len() {
            0 => Vector3::new(-PLACEMENT_OFFSET_X, 0.0, 0.0),
            2 => Vector3::new(PLACEMENT_OFFSET_X, 0.0, 0.0),
            _ => Vector3::zeros(),
        });
        self.figures.push(figure);
        log::debug!("добавлена фигура {kind:?}, всего {}", self.figures.len());
        Ok(())
    }

    /// Removes the most recently added figure; an empty list is a no-op.
    pub fn remove_figure(&mut self) {
        if self.figures.pop().is_some() {
            log::debug!("последняя фигура удалена, осталось {}", self.figures.len());
        }
    }

    /// Mutable access to the figure in `index`, guarded the same way the UI
    /// actions are.
    pub fn figure_mut(&mut self, index: usize) -> Result<&mut Figure, SceneError> {
        self.figures
            .get_mut(index)
            .ok_or(SceneError::FigureNotCreated(index))
    }

    /// One animation step: every enabled spin advances by the per-scene
    /// angle and the animated light, if any, takes its step.
    pub fn tick(&mut self, elapsed_seconds: f32) {
        for figure in &mut self.figures {
            figure.advance_rotation(self.rotation_step);
        }
        if let (Some(animation), Some(rig)) = (self.light_animation, self.lighting.as_mut()) {
            animation.advance(&mut rig.point, elapsed_seconds);
        }
    }

    pub fn light_animation(&self) -> Option<LightAnimation> {
        self.light_animation
    }

    pub fn set_light_animation(&mut self, animation: LightAnimation) {
        self.light_animation = Some(animation);
    }

    /// Rebuilds the subdivided sphere at a new depth, keeping its transform.
    pub fn set_sphere_subdivisions(&mut self, level: u32) {
        if let Some(figure) = self.figures.first_mut() {
            figure.replace_mesh(Mesh::sphere(level));
        }
    }
}
