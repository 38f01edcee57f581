pub mod track_scene;

pub use track_scene::render_track;
