use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensões testadas, na ordem de prioridade.
pub const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png"];

/// Procura a foto de um produto na pasta de imagens.
///
/// Para cada extensão testa primeiro o nome em minúsculas e depois a
/// variante com a extensão em MAIÚSCULAS (só a extensão muda de caixa, o
/// código não). Devolve o primeiro caminho existente; `None` significa
/// produto sem foto e não é um erro.
pub fn find_image(images_dir: &Path, code: &str) -> Option<PathBuf> {
    let base = code.trim();

    for ext in IMAGE_EXTENSIONS {
        let lower = images_dir.join(format!("{}{}", base, ext));
        if lower.exists() {
            return Some(lower);
        }

        // Alguns sistemas gravam a extensão em maiúsculas
        let upper = images_dir.join(format!("{}{}", base, ext.to_uppercase()));
        if upper.exists() {
            return Some(upper);
        }
    }

    None
}

/// Conta os arquivos de imagem diretamente na pasta (sem recursão).
///
/// Usado só na mensagem de resumo do console; uma pasta inexistente conta
/// como zero.
pub fn count_images(images_dir: &Path) -> usize {
    WalkDir::new(images_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| {
                    let ext = ext.to_string_lossy().to_lowercase();
                    IMAGE_EXTENSIONS.iter().any(|known| known[1..] == ext)
                })
                .unwrap_or(false)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_find_lowercase_jpg() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("01.0001.jpg")).unwrap();

        let found = find_image(dir.path(), "01.0001");
        assert_eq!(found, Some(dir.path().join("01.0001.jpg")));
    }

    #[test]
    fn test_find_uppercase_extension_fallback() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("01.0002.JPG")).unwrap();

        let found = find_image(dir.path(), "01.0002");
        assert_eq!(found, Some(dir.path().join("01.0002.JPG")));
    }

    #[test]
    fn test_extension_priority_jpg_wins_over_png() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("01.0003.png")).unwrap();
        File::create(dir.path().join("01.0003.jpg")).unwrap();

        let found = find_image(dir.path(), "01.0003");
        assert_eq!(found, Some(dir.path().join("01.0003.jpg")));
    }

    #[test]
    fn test_jpeg_checked_before_png() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("X.png")).unwrap();
        File::create(dir.path().join("X.jpeg")).unwrap();

        let found = find_image(dir.path(), "X");
        assert_eq!(found, Some(dir.path().join("X.jpeg")));
    }

    #[test]
    fn test_nothing_found() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("outro.jpg")).unwrap();

        assert_eq!(find_image(dir.path(), "01.0004"), None);
    }

    #[test]
    fn test_code_is_trimmed() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("01.0005.jpg")).unwrap();

        let found = find_image(dir.path(), "  01.0005  ");
        assert_eq!(found, Some(dir.path().join("01.0005.jpg")));
    }

    #[test]
    fn test_missing_directory_is_not_an_error() {
        let found = find_image(Path::new("/pasta/que/nao/existe"), "01.0006");
        assert_eq!(found, None);
    }

    #[test]
    fn test_count_images() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("a.jpg")).unwrap();
        File::create(dir.path().join("b.PNG")).unwrap();
        File::create(dir.path().join("c.jpeg")).unwrap();
        File::create(dir.path().join("leia-me.txt")).unwrap();

        assert_eq!(count_images(dir.path()), 3);
    }

    #[test]
    fn test_count_images_missing_directory() {
        assert_eq!(count_images(Path::new("/pasta/que/nao/existe")), 0);
    }
}
