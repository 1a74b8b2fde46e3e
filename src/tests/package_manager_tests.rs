#[cfg(test)]
mod tests {
    use crate::package_manager::PackageManager;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_to_npm() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(PackageManager::detect(temp_dir.path()), PackageManager::Npm);
    }

    #[test]
    fn test_detects_pnpm() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("pnpm-lock.yaml")).unwrap();
        assert_eq!(PackageManager::detect(temp_dir.path()), PackageManager::Pnpm);
    }

    #[test]
    fn test_detects_yarn() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("yarn.lock")).unwrap();
        assert_eq!(PackageManager::detect(temp_dir.path()), PackageManager::Yarn);
    }

    #[test]
    fn test_detects_bun() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("bun.lock")).unwrap();
        assert_eq!(PackageManager::detect(temp_dir.path()), PackageManager::Bun);
    }

    #[test]
    fn test_pnpm_wins_over_later_probes() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("pnpm-lock.yaml")).unwrap();
        File::create(temp_dir.path().join("yarn.lock")).unwrap();
        assert_eq!(PackageManager::detect(temp_dir.path()), PackageManager::Pnpm);
    }

    #[test]
    fn test_install_commands() {
        assert_eq!(PackageManager::Npm.install_command(), "npm install");
        assert_eq!(PackageManager::Pnpm.install_command(), "pnpm install");
        assert_eq!(PackageManager::Yarn.install_command(), "yarn install");
        assert_eq!(PackageManager::Bun.install_command(), "bun install");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(PackageManager::Pnpm.to_string(), "pnpm");
        assert_eq!(PackageManager::Npm.to_string(), "npm");
    }
}
