/*!
 * VFS Benchmarks
 * Hot-path costs of store mutations and search
 */

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use webdesk_core::VfsManager;

fn bench_create_delete(c: &mut Criterion) {
    c.bench_function("create_delete_file", |b| {
        let fs = VfsManager::new();
        let root = fs.root_id();
        let mut n = 0u64;
        b.iter(|| {
            n += 1;
            let id = fs
                .create_file(&format!("bench-{n}.txt"), Some("payload"), Some(root))
                .unwrap();
            fs.delete(black_box(id)).unwrap();
        });
    });
}

fn bench_search(c: &mut Criterion) {
    let fs = VfsManager::new();
    let root = fs.root_id();
    for n in 0..1000 {
        fs.create_file(&format!("file-{n}.txt"), None, Some(root))
            .unwrap();
    }

    c.bench_function("search_1000_entities", |b| {
        b.iter(|| black_box(fs.search("file-99")));
    });
}

fn bench_deep_copy_paste(c: &mut Criterion) {
    let fs = VfsManager::new();
    let root = fs.root_id();
    let source = fs.create_folder("source", Some(root)).unwrap();
    for n in 0..50 {
        fs.create_file(&format!("doc-{n}.txt"), Some("content"), Some(source))
            .unwrap();
    }
    let dest = fs.create_folder("dest", Some(root)).unwrap();
    fs.descend(dest).unwrap();

    c.bench_function("copy_paste_50_files", |b| {
        b.iter(|| {
            fs.copy(&[source]);
            let pasted = fs.paste().unwrap();
            for id in pasted {
                fs.delete(id).unwrap();
            }
        });
    });
}

criterion_group!(
    benches,
    bench_create_delete,
    bench_search,
    bench_deep_copy_paste
);
criterion_main!(benches);
