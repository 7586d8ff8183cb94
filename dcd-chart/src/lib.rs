/**
 * The sidebar filter/sort pipeline applied ahead of the transform.
 */
mod pipeline;
pub use pipeline::*;

/**
 * Composition of a full render pass into a view for the rendering
 * collaborator.
 */
mod render;
pub use render::*;

/**
 * The cumulative-offset demand-curve transform.
 */
mod transform;
pub use transform::*;
