use tracing::warn;

use super::Viewer;

/// Certificates overlay: optional full-screen document viewer
#[derive(Default)]
pub struct CertificatesState {
    viewing: Option<Viewer>,
}

impl CertificatesState {
    pub fn viewing(&self) -> Option<&Viewer> {
        self.viewing.as_ref()
    }

    pub fn viewing_mut(&mut self) -> Option<&mut Viewer> {
        self.viewing.as_mut()
    }

    pub fn view(&mut self, index: usize, len: usize) {
        if index >= len {
            warn!(index, len, "certificate selection out of range");
            return;
        }
        self.viewing = Some(Viewer::new(index));
    }

    pub fn close(&mut self) {
        self.viewing = None;
    }
}

/// Contact overlay: the resume viewer
#[derive(Default)]
pub struct ContactState {
    resume: Option<Viewer>,
}

impl ContactState {
    pub fn resume_visible(&self) -> bool {
        self.resume.is_some()
    }

    pub fn resume_mut(&mut self) -> Option<&mut Viewer> {
        self.resume.as_mut()
    }

    pub fn show_resume(&mut self) {
        if self.resume.is_none() {
            self.resume = Some(Viewer::new(0));
        }
    }

    pub fn hide_resume(&mut self) {
        self.resume = None;
    }
}
