use serde::{Deserialize, Serialize};

/// Issued certificate handed to deploy tasks by the issuance workflow.
#[derive(Clone, Serialize, Deserialize)]
pub struct CertificateBundle {
    /// PEM certificate chain.
    pub crt: String,
    /// PEM private key.
    pub key: String,
}

impl std::fmt::Debug for CertificateBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateBundle")
            .field("crt", &format_args!("<{} bytes>", self.crt.len()))
            .field("key", &"***")
            .finish()
    }
}

/// Input handed to [`DeployTask::execute`](crate::DeployTask::execute).
#[derive(Debug, Clone)]
pub struct TaskInput<'a, P> {
    /// Certificate produced by the previous pipeline step.
    pub cert: &'a CertificateBundle,
    /// Task properties as configured by the user.
    pub props: &'a P,
}
