use crate::areas::repository::Repository;

impl Repository {
    pub fn status(&self) -> anyhow::Result<()> {
        let status = self.status_info()?;
        tracing::debug!(clean = status.is_clean(), "computed status");

        status.print(&mut **self.writer())
    }
}
