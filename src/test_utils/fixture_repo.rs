use std::path::{Path, PathBuf};

use anyhow::{Context, Error};
use git2::{Repository, Signature};

/// A throwaway repository with one commit on the requested branch
pub struct FixtureRepo {
    path: PathBuf,
    repo: Repository,
}

/// Create a committed repository in a temp dir with HEAD on `branch`
pub fn create_fixture_repo(branch: &str) -> (assert_fs::TempDir, FixtureRepo) {
    let temp_dir = assert_fs::TempDir::new().unwrap();
    let fixture = FixtureRepo::init(temp_dir.path(), branch).unwrap();
    (temp_dir, fixture)
}

impl FixtureRepo {
    fn init(path: &Path, branch: &str) -> Result<Self, Error> {
        let repo = Repository::init(path).context("Failed to initialize git repository")?;

        {
            let mut config = repo.config().context("Failed to get repository config")?;
            config.set_str("user.name", "Test User")?;
            config.set_str("user.email", "test@example.com")?;
        }

        // The first commit creates the branch HEAD points at
        repo.set_head(&format!("refs/heads/{branch}"))
            .context(format!("Failed to point HEAD at '{branch}'"))?;

        let fixture = Self {
            path: path.to_path_buf(),
            repo,
        };
        fixture.commit_file("README.md", "fixture\n", "Initial commit")?;

        Ok(fixture)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a file relative to the repository root, creating parent directories
    pub fn write_file(&self, filename: &str, content: &str) {
        let file_path = self.path.join(filename);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(file_path, content).unwrap();
    }

    fn commit_file(&self, filename: &str, content: &str, message: &str) -> Result<(), Error> {
        self.write_file(filename, content);

        let mut index = self.repo.index().context("Failed to get repository index")?;
        index
            .add_path(Path::new(filename))
            .context("Failed to add file to index")?;
        index.write().context("Failed to write index")?;

        let tree_id = index.write_tree().context("Failed to write tree")?;
        let tree = self.repo.find_tree(tree_id)?;
        let signature = Signature::now("Test User", "test@example.com")?;

        self.repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &[])
            .context("Failed to create commit")?;

        Ok(())
    }

    /// Register `url` as the `origin` remote
    pub fn add_origin(&self, url: &str) {
        self.repo.remote("origin", url).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::create_fixture_repo;

    #[test]
    fn create_fixture_repo_checks_out_requested_branch() {
        let (_temp_dir, fixture) = create_fixture_repo("feature/PLTO-1-x");

        let head = fixture.repo.head().unwrap();

        assert_eq!(head.shorthand(), Some("feature/PLTO-1-x"));
        assert!(fixture.path().join("README.md").exists());
    }

    #[test]
    fn add_origin_works() {
        let (_temp_dir, fixture) = create_fixture_repo("master");

        fixture.add_origin("git@github.com:acme/widgets.git");

        let remote = fixture.repo.find_remote("origin").unwrap();
        assert_eq!(remote.url(), Some("git@github.com:acme/widgets.git"));
    }
}
