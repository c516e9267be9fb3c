#![forbid(unsafe_code)]
// #![warn(clippy::pedantic)]
#![warn(clippy::alloc_instead_of_core)]
#![warn(clippy::std_instead_of_core)]

pub mod error;
pub mod merger;
pub mod report;
pub mod utils;

pub use error::{DocumentRole, MergeError};
pub use merger::{attachment::Origin, Merger, MergerBuilder};
pub use report::{CopyAction, MergeReport};
pub use utils::document::UrdfDocument;

/// Attach the gripper in `gripper` to the robot in `robot` and write the
/// combined URDF to `output`, using the default UR10e / Hand-E conventions.
pub fn combine_files<R, G, O>(
    robot: R,
    gripper: G,
    output: O,
) -> Result<MergeReport, MergeError>
where
    R: AsRef<std::path::Path>,
    G: AsRef<std::path::Path>,
    O: AsRef<std::path::Path>,
{
    Merger::new().run(robot, gripper, output)
}
