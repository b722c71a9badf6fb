use cairn::graph::{algorithms, search, Graph};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn chain_graph(size: usize) -> Graph<usize> {
    let mut g = Graph::directed();
    for i in 0..size {
        g.add_vertex(i);
    }
    // Chain: 0->1->...->N
    for i in 0..size - 1 {
        g.add_edge(i, i + 1, 1.0);
    }
    g
}

fn binary_tree_graph(size: usize) -> Graph<usize> {
    let mut g = Graph::undirected();
    for i in 0..size {
        g.add_vertex(i);
    }
    // Tree-like structure
    for i in 1..size {
        g.add_edge(i / 2, i, 1.0);
    }
    g
}

fn dag_graph(size: usize) -> Graph<usize> {
    let mut g = Graph::directed();
    for i in 0..size {
        g.add_vertex(i);
    }
    // Forward fan-out: each vertex points at the next two
    for i in 0..size {
        for step in [1, 2] {
            if i + step < size {
                g.add_edge(i, i + step, 1.0);
            }
        }
    }
    g
}

fn bench_traversal(c: &mut Criterion) {
    let size = 1000;

    c.bench_function("graph_build_chain", |b| {
        b.iter(|| black_box(chain_graph(size)));
    });

    let chain = chain_graph(size);
    let tree = binary_tree_graph(size);

    c.bench_function("bfs_chain", |b| {
        b.iter(|| black_box(search::bfs(&chain, 0, &mut ())));
    });

    c.bench_function("dfs_chain", |b| {
        b.iter(|| black_box(search::dfs(&chain, 0, &mut ())));
    });

    c.bench_function("bfs_tree", |b| {
        b.iter(|| black_box(search::bfs(&tree, 0, &mut ())));
    });

    c.bench_function("dfs_tree", |b| {
        b.iter(|| black_box(search::dfs(&tree, 0, &mut ())));
    });
}

fn bench_algorithms(c: &mut Criterion) {
    let size = 1000;

    let tree = binary_tree_graph(size);
    c.bench_function("connected_components_tree", |b| {
        b.iter(|| black_box(algorithms::connected_components(&tree)));
    });

    c.bench_function("is_bipartite_tree", |b| {
        b.iter(|| black_box(algorithms::is_bipartite(&tree)));
    });

    let dag = dag_graph(size);
    c.bench_function("topological_sort_dag", |b| {
        b.iter(|| black_box(algorithms::topological_sort(&dag)));
    });

    c.bench_function("find_back_edges_dag", |b| {
        b.iter(|| black_box(algorithms::find_back_edges(&dag)));
    });

    let run = search::bfs(&tree, 0, &mut ());
    c.bench_function("find_path_deep_leaf", |b| {
        b.iter(|| black_box(algorithms::find_path(&run, 0, size - 1)));
    });
}

criterion_group!(benches, bench_traversal, bench_algorithms);
criterion_main!(benches);
