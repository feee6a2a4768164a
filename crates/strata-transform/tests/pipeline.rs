//! End-to-end runs over a small Maven project laid out flat.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use strata_config::Toggles;
use strata_transform::{ProjectDescriptor, Transformer};
use tempfile::TempDir;

const POM: &str = r"<project>
    <groupId>com.acme</groupId>
    <artifactId>shop</artifactId>
    <dependencies>
        <dependency>
            <groupId>org.projectlombok</groupId>
            <artifactId>lombok</artifactId>
        </dependency>
    </dependencies>
</project>
";

const ORDER_SERVICE: &str = r"package com.acme.shop.services;

import com.acme.shop.model.Order;
import com.acme.shop.repository.OrderRepository;

@Service
public class OrderService {
    private final OrderRepository orderRepository;

    public OrderService(OrderRepository orderRepository) {
        this.orderRepository = orderRepository;
    }

    @Transactional
    public Order create(Order order) {
        return orderRepository.save(order);
    }

    public List<Order> findAll() {
        return orderRepository.findAll();
    }

    private void audit(Order order) {
        System.out.println(order);
    }
}
";

const FILES: &[(&str, &str)] = &[
    ("services/OrderService.java", ORDER_SERVICE),
    (
        "services/Broken.java",
        "package com.acme.shop.services;\nclass Broken { void f() { ) ) ) } }\n",
    ),
    (
        "repository/OrderRepository.java",
        "package com.acme.shop.repository;\n\npublic interface OrderRepository {\n    Order save(Order order);\n}\n",
    ),
    (
        "repository/OrderQueries.java",
        "package com.acme.shop.repository;\n\npublic class OrderQueries {\n}\n",
    ),
    (
        "controller/OrderController.java",
        "package com.acme.shop.controller;\n\n@RestController\npublic class OrderController {\n}\n",
    ),
    (
        "model/OrderModel.java",
        "package com.acme.shop.model;\n\npublic class OrderModel {\n}\n",
    ),
    (
        "model/Customer.java",
        "package com.acme.shop.model;\n\npublic class Customer {\n}\n",
    ),
    (
        "enums/Status.java",
        "package com.acme.shop.enums;\n\npublic enum Status { OPEN }\n",
    ),
    (
        "config/WebConfig.java",
        "package com.acme.shop.config;\n\npublic class WebConfig {\n}\n",
    ),
    (
        "dto/OrderDto.java",
        "package com.acme.shop.dto;\n\npublic record OrderDto(Long id) {\n}\n",
    ),
];

fn project() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    fs::write(tmp.path().join("pom.xml"), POM).expect("pom");
    let root = tmp.path().join("src/main/java/com/acme/shop");
    for (relative, content) in FILES {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(path, content).expect("write");
    }
    (tmp, root)
}

fn transformer(project_root: &Path, toggles: Toggles) -> Transformer {
    let descriptor = ProjectDescriptor::read(project_root).expect("descriptor");
    Transformer::new(&descriptor, toggles)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

#[test]
fn full_run_builds_clean_layout() {
    let (tmp, root) = project();

    let report = transformer(tmp.path(), Toggles::default())
        .run()
        .expect("run");

    let contract = read(&root.join("data/contracts/order/CreateOrderUseCase.java"));
    assert!(contract.contains("package com.acme.shop.data.contracts.order;"));
    assert!(contract.contains("public interface CreateOrderUseCase {"));
    assert!(contract.contains("    Order create(Order order);"));
    assert!(root.join("data/contracts/order/FindAllOrderUseCase.java").is_file());
    assert!(!root.join("data/contracts/order/AuditOrderUseCase.java").exists());

    let implementation = read(&root.join("data/usecases/order/CreateOrderUseCaseImpl.java"));
    assert!(implementation.contains("package com.acme.shop.data.usecases.order;"));
    assert!(implementation.contains("import com.acme.shop.data.contracts.order.CreateOrderUseCase;"));
    assert!(implementation.contains("import com.acme.shop.repository.OrderRepository;"));
    assert!(implementation.contains("@RequiredArgsConstructor\npublic class CreateOrderUseCaseImpl"));
    assert!(implementation.contains("    private final OrderRepository orderRepository;"));
    assert!(implementation.contains(
        "    @Override\n    @Transactional\n    public Order create(Order order) {\n        return orderRepository.save(order);\n    }"
    ));

    assert!(root.join("domain/repositories/OrderRepository.java").is_file());
    assert!(!root.join("domain/repositories/OrderQueries.java").exists());
    assert!(root.join("presentation/controllers/OrderController.java").is_file());

    assert!(root.join("infra/config/WebConfig.java").is_file());
    assert!(root.join("data/dto/OrderDto.java").is_file());
    assert!(root.join("domain/enums/Status.java").is_file());
    assert!(root.join("domain/entities/OrderEntity.java").is_file());
    assert!(root.join("domain/entities/CustomerEntity.java").is_file());
    assert!(!root.join("domain/model").exists());
    assert!(root.join("model/OrderModel.java").is_file());

    assert_eq!(
        report.unparsable,
        vec![root.join("services/Broken.java")]
    );
    assert!(report.ambiguous.is_empty());
    assert_eq!(report.renamed_files, 3);
}

#[test]
fn second_run_changes_nothing() {
    let (tmp, root) = project();
    let transformer = transformer(tmp.path(), Toggles::default());

    transformer.run().expect("first run");
    let impl_path = root.join("data/usecases/order/CreateOrderUseCaseImpl.java");
    let first = read(&impl_path);

    let report = transformer.run().expect("second run");

    assert!(report.created.is_empty(), "created again: {:?}", report.created);
    assert!(report.layers.is_empty(), "layers again: {:?}", report.layers);
    assert_eq!(report.renamed_files, 0);
    assert_eq!(read(&impl_path), first);
    assert!(!root.join("domain/model").exists());
}

#[test]
fn hand_edited_artifact_survives() {
    let (tmp, root) = project();
    let contract = root.join("data/contracts/order/CreateOrderUseCase.java");
    fs::create_dir_all(contract.parent().expect("parent")).expect("mkdir");
    fs::write(&contract, "// edited by hand\n").expect("seed");

    let report = transformer(tmp.path(), Toggles::default())
        .run()
        .expect("run");

    assert_eq!(read(&contract), "// edited by hand\n");
    assert!(report.skipped.contains(&contract));
}

#[test]
fn disabled_transformations_do_not_run() {
    let (tmp, root) = project();
    let toggles = Toggles {
        data: true,
        ..Toggles::none()
    };

    let report = transformer(tmp.path(), toggles).run().expect("run");

    assert!(root.join("data/dto/OrderDto.java").is_file());
    assert!(!root.join("data/contracts").exists());
    assert!(!root.join("domain").exists());
    assert!(!root.join("presentation").exists());
    assert!(report.unparsable.is_empty());
}

#[test]
fn missing_source_root_is_an_error() {
    let tmp = TempDir::new().expect("tempdir");
    fs::write(tmp.path().join("pom.xml"), POM).expect("pom");

    let err = transformer(tmp.path(), Toggles::default())
        .run()
        .expect_err("should fail");
    assert!(matches!(
        err,
        strata_transform::TransformError::MissingSourceRoot(_)
    ));
}

#[test]
fn without_lombok_an_explicit_constructor_is_written() {
    let (tmp, root) = project();
    fs::write(
        tmp.path().join("pom.xml"),
        "<project><groupId>com.acme</groupId><artifactId>shop</artifactId></project>",
    )
    .expect("pom");
    let toggles = Toggles {
        implementations: true,
        ..Toggles::none()
    };

    transformer(tmp.path(), toggles).run().expect("run");

    let implementation = read(&root.join("data/usecases/order/FindAllOrderUseCaseImpl.java"));
    assert!(!implementation.contains("lombok"));
    assert!(implementation.contains(
        "    public FindAllOrderUseCaseImpl(OrderRepository orderRepository) {\n        this.orderRepository = orderRepository;\n    }"
    ));
}

#[test]
fn configured_extension_is_indexed_and_generated() {
    let tmp = TempDir::new().expect("tempdir");
    fs::write(tmp.path().join("pom.xml"), POM).expect("pom");
    let root = tmp.path().join("src/main/java/com/acme/shop");
    for (relative, content) in [
        ("services/OrderService.jav", ORDER_SERVICE),
        (
            "model/OrderModel.jav",
            "package com.acme.shop.model;\n\npublic class OrderModel {\n}\n",
        ),
    ] {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(path, content).expect("write");
    }
    let toggles = Toggles {
        use_cases: true,
        implementations: true,
        domain: true,
        ..Toggles::none()
    };

    let report = transformer(tmp.path(), toggles)
        .with_extension("jav")
        .run()
        .expect("run");

    assert!(report.unparsable.is_empty());
    let contract = read(&root.join("data/contracts/order/CreateOrderUseCase.jav"));
    assert!(contract.contains("    Order create(Order order);"));
    assert!(root.join("data/usecases/order/FindAllOrderUseCaseImpl.jav").is_file());
    assert!(root.join("domain/entities/OrderEntity.jav").is_file());
}
