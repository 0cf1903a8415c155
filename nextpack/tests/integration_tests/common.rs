// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    create_binary_file(dir, name, content.as_bytes())
}

pub fn create_binary_file(dir: &Path, name: &str, content: &[u8]) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content)?;
    Ok(())
}

/// A small App Router project with a bit of everything.
pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    create_test_file(
        root,
        "app/layout.tsx",
        "export default function RootLayout({ children }) {\n  return <html>{children}</html>\n}\n",
    )?;
    create_test_file(
        root,
        "app/page.tsx",
        "export default function Home() {\n  return <main />\n}\n",
    )?;
    create_test_file(
        root,
        "app/dashboard/page.tsx",
        "\"use client\"\n\nexport default function Dashboard() {}\n",
    )?;
    create_test_file(root, "app/dashboard/loading.tsx", "export default () => null\n")?;
    create_test_file(
        root,
        "app/api/users/route.ts",
        "export async function GET() {}\n",
    )?;
    create_test_file(root, "pages/api/legacy.ts", "export default function handler() {}\n")?;
    create_test_file(
        root,
        "components/ui/Button.tsx",
        "'use client'\nexport function Button() {}\n",
    )?;
    create_test_file(root, "components/Header.tsx", "export function Header() {}\n")?;
    create_test_file(root, "hooks/useSession.ts", "export function useSession() {}\n")?;
    create_test_file(root, "lib/db.ts", "export const db = {}\n")?;
    create_test_file(root, "src/utils/format.ts", "export const format = String\n")?;
    create_test_file(root, "types/index.d.ts", "export type Id = string\n")?;
    create_test_file(root, "middleware.ts", "export function middleware() {}\n")?;
    create_test_file(root, "next.config.js", "module.exports = {}\n")?;
    create_test_file(root, "app/providers.tsx", "export function Providers() {}\n")?;

    create_test_file(root, "next-env.d.ts", "/// <reference types=\"next\" />\n")?;
    create_test_file(root, ".eslintrc.js", "module.exports = {}\n")?;
    create_test_file(root, "README.md", "# Fixture\n")?;
    create_test_file(root, "node_modules/next/dist/index.js", "module.exports = {}\n")?;
    create_test_file(root, "public/sw.js", "self.addEventListener('fetch', () => {})\n")?;
    create_test_file(root, ".next/server/app/page.tsx", "export {}\n")?;

    Ok(temp_dir)
}
