use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Write a minimal JAR: an optional manifest with a Class-Path attribute and
/// a list of class-file entries.
pub fn write_jar(path: &Path, class_path: Option<&str>, entries: &[&str]) {
    let file = File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    if let Some(class_path) = class_path {
        zip.start_file("META-INF/MANIFEST.MF", options).unwrap();
        write!(zip, "Manifest-Version: 1.0\r\nClass-Path: {class_path}\r\n\r\n").unwrap();
    }
    for entry in entries {
        zip.start_file(*entry, options).unwrap();
        // CAFEBABE header is enough to look like a class file
        zip.write_all(&[0xCA, 0xFE, 0xBA, 0xBE, 0x00, 0x00, 0x00, 0x34])
            .unwrap();
    }
    zip.finish().unwrap();
}
