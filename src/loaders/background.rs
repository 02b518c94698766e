use anyhow::{anyhow, Result};
use futures::channel::oneshot;
use log::debug;
use std::path::{Path, PathBuf};
use std::thread;

use super::gltf::{load_model, ModelData};

/// A model load running off the render thread
///
/// The result is picked up by polling from the frame loop, so the scene is
/// only ever touched on the thread that owns it.
pub struct ModelRequest {
    path: PathBuf,
    receiver: Option<oneshot::Receiver<Result<ModelData>>>,
}

impl ModelRequest {
    pub fn spawn(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let (sender, receiver) = oneshot::channel();

        let worker_path = path.clone();
        let spawned = thread::Builder::new()
            .name("model-loader".to_string())
            .spawn(move || {
                let result = load_model(&worker_path);
                if sender.send(result).is_err() {
                    debug!("model request dropped before load finished");
                }
            });

        if let Err(e) = spawned {
            // The sender went down with the closure, so the first poll
            // reports the load as failed.
            debug!("could not start model loader: {}", e);
        }

        Self {
            path,
            receiver: Some(receiver),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_finished(&self) -> bool {
        self.receiver.is_none()
    }

    /// Returns the load result once, as soon as it is available
    pub fn poll(&mut self) -> Option<Result<ModelData>> {
        let receiver = self.receiver.as_mut()?;
        let outcome = match receiver.try_recv() {
            Ok(None) => return None,
            Ok(Some(result)) => result,
            Err(oneshot::Canceled) => Err(anyhow!("model loader for {:?} exited", self.path)),
        };
        self.receiver = None;
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn wait(request: &mut ModelRequest) -> Result<ModelData> {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            if let Some(result) = request.poll() {
                return result;
            }
            assert!(Instant::now() < deadline, "model load did not finish");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_missing_file_reports_error_once() {
        let mut request = ModelRequest::spawn("does/not/exist/model.glb");
        assert_eq!(request.path(), Path::new("does/not/exist/model.glb"));
        let err = wait(&mut request).unwrap_err();
        assert!(format!("{err:#}").contains("model.glb"));
        assert!(request.is_finished());
        assert!(request.poll().is_none());
    }
}
