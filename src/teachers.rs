// File: ./src/teachers.rs
//! The teacher directory: fetched once, shuffled once, rendered once.
use crate::client::{FeedClient, LoadError};
use crate::markup;
use crate::model::Teacher;
use crate::surface::ListSurface;

/// Fisher–Yates shuffle; every permutation is equally likely.
pub fn shuffle<T>(items: &mut [T], rng: &mut fastrand::Rng) {
    for i in (1..items.len()).rev() {
        let j = rng.usize(..=i);
        items.swap(i, j);
    }
}

pub struct TeacherDirectory;

impl TeacherDirectory {
    pub async fn fetch(client: &FeedClient, path: &str) -> Result<Vec<Teacher>, LoadError> {
        let teachers: Vec<Teacher> = client.get_json(path).await?;
        log::info!("Loaded {} teachers", teachers.len());
        Ok(teachers)
    }

    /// Fetch, shuffle and render. On error the surface shows the teacher error
    /// block and the directory is empty.
    pub async fn load(
        client: &FeedClient,
        path: &str,
        rng: &mut fastrand::Rng,
        surface: &mut impl ListSurface,
    ) -> Vec<Teacher> {
        match Self::fetch(client, path).await {
            Ok(mut teachers) => {
                shuffle(&mut teachers, rng);
                Self::render(&teachers, surface);
                teachers
            }
            Err(e) => {
                log::error!("{}", e);
                surface.replace_content(markup::teacher_error());
                Vec::new()
            }
        }
    }

    pub fn render(teachers: &[Teacher], surface: &mut impl ListSurface) {
        if teachers.is_empty() {
            return;
        }
        surface.append(teachers.iter().map(markup::teacher_card).collect());
    }
}
