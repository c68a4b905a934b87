use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use props_map::{PropertyMap, delete_unexpanded_props, split_quoted_string};

/// Builds a map of `entries` chained properties plus filler keys
fn generate_property_map(entries: usize) -> PropertyMap {
    let mut props = PropertyMap::new();
    props.set("build.path", "/tmp/build");
    props.set("build.mcu", "atmega328p");
    props.set("compiler.path", "{build.path}/tools/");
    props.set("compiler.c.cmd", "avr-gcc");
    props.set(
        "recipe.c.pattern",
        "{compiler.path}{compiler.c.cmd} -mmcu={build.mcu} {compiler.c.flags}",
    );
    props.set("compiler.c.flags", "-c -Os -w");
    for i in 0..entries {
        props.set(format!("board_{i}.name"), format!("Board {i}"));
        props.set(format!("board_{i}.upload.speed"), "115200");
    }
    props
}

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");
    for entries in [10, 100, 1000] {
        let props = generate_property_map(entries);
        group.bench_with_input(
            BenchmarkId::from_parameter(entries),
            &props,
            |b, props| {
                b.iter(|| props.expand(black_box("{recipe.c.pattern} -o {build.path}/sketch.o")));
            },
        );
    }
    group.finish();
}

fn bench_delete_unexpanded(c: &mut Criterion) {
    let input = "gcc -P {serial.port} -U \"flash:w:{build.path}/sketch.hex:i\" {extra.flags}";
    c.bench_function("delete_unexpanded", |b| {
        b.iter(|| delete_unexpanded_props(black_box(input)));
    });
}

fn bench_split_quoted_string(c: &mut Criterion) {
    let input = r#"avr-gcc -c -Os "-DUSB_MANUFACTURER=\"Arduino LLC\"" -mmcu=atmega328p -o build/sketch.o sketch.c"#;
    c.bench_function("split_quoted_string", |b| {
        b.iter(|| split_quoted_string(black_box(input), "\"", false));
    });
}

criterion_group!(
    benches,
    bench_expand,
    bench_delete_unexpanded,
    bench_split_quoted_string
);
criterion_main!(benches);
