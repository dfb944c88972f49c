// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Built-in tool and workflow tables of every domain.

use super::config::{DomainConfig, ToolConfig, WorkflowConfig};
use atelier_core::domain::Domain;

/// The configuration every unresolved lookup falls back to.
pub(crate) const FALLBACK: DomainConfig = UNKNOWN;

/// All built-in configurations, in [`Domain::ALL`] order.
pub(crate) const BUILTIN: [DomainConfig; 15] = [
    BUILDING,
    CHARACTER,
    CAD,
    VEGETATION,
    TEXTILE,
    OCEAN,
    MINING,
    AEROSPACE,
    GAMING,
    FILM,
    MEDICAL,
    PRODUCT,
    FURNITURE,
    JEWELRY,
    UNKNOWN,
];

const BUILDING_TOOLS: &[ToolConfig] = &[
    ToolConfig::new(
        "measure",
        "Measurements",
        "Ruler",
        "Take precise measurements",
        "Analysis",
    )
    .with_shortcut("M"),
    ToolConfig::new(
        "section",
        "Section Cuts",
        "Scissors",
        "Create section planes",
        "Visualization",
    )
    .with_shortcut("X"),
    ToolConfig::new(
        "bim-inspector",
        "BIM Inspector",
        "Search",
        "Inspect BIM properties",
        "Analysis",
    ),
    ToolConfig::new(
        "clash-detect",
        "Clash Detection",
        "AlertTriangle",
        "Detect model clashes",
        "Analysis",
    ),
    ToolConfig::new(
        "material-takeoff",
        "Material Takeoff",
        "Package",
        "Generate material quantities",
        "Export",
    ),
    ToolConfig::new(
        "structural",
        "Structural Analysis",
        "Columns",
        "Analyze structural loads",
        "Analysis",
    ),
];

const BUILDING_WORKFLOWS: &[WorkflowConfig] = &[
    WorkflowConfig {
        id: "review",
        name: "Design Review",
        steps: &["Load model", "Section cuts", "Measurements", "Export report"],
    },
    WorkflowConfig {
        id: "clash",
        name: "Clash Analysis",
        steps: &["Load models", "Run detection", "Review clashes", "Export results"],
    },
];

const BUILDING: DomainConfig = DomainConfig {
    id: Domain::Building,
    name: "Building / Civil",
    icon: "🏗️",
    color: "domain-building",
    description: "BIM, architectural models, structural engineering",
    tools: BUILDING_TOOLS,
    workflows: BUILDING_WORKFLOWS,
};

const CHARACTER_TOOLS: &[ToolConfig] = &[
    ToolConfig::new(
        "rig-tools",
        "Rigging Tools",
        "Bone",
        "Edit skeleton and rig",
        "Rigging",
    )
    .with_shortcut("R"),
    ToolConfig::new(
        "weight-paint",
        "Weight Painting",
        "Paintbrush",
        "Paint vertex weights",
        "Rigging",
    )
    .with_shortcut("W"),
    ToolConfig::new(
        "morph-targets",
        "Morph Targets",
        "Smile",
        "Edit blend shapes",
        "Animation",
    ),
    ToolConfig::new(
        "pose-library",
        "Pose Library",
        "Users",
        "Save and apply poses",
        "Animation",
    ),
    ToolConfig::new(
        "cloth-sim",
        "Cloth Simulation",
        "Shirt",
        "Simulate cloth physics",
        "Physics",
    ),
    ToolConfig::new(
        "retarget",
        "Animation Retarget",
        "RefreshCw",
        "Transfer animations",
        "Animation",
    ),
];

const CHARACTER_WORKFLOWS: &[WorkflowConfig] = &[
    WorkflowConfig {
        id: "rig-setup",
        name: "Rig Setup",
        steps: &["Import character", "Create skeleton", "Paint weights", "Test poses"],
    },
    WorkflowConfig {
        id: "animate",
        name: "Animation",
        steps: &["Load rig", "Record keyframes", "Polish curves", "Export"],
    },
];

const CHARACTER: DomainConfig = DomainConfig {
    id: Domain::Character,
    name: "Human / Character",
    icon: "👤",
    color: "domain-character",
    description: "Character models, rigging, animation",
    tools: CHARACTER_TOOLS,
    workflows: CHARACTER_WORKFLOWS,
};

const CAD_TOOLS: &[ToolConfig] = &[
    ToolConfig::new(
        "parametric",
        "Parametric Edit",
        "Settings",
        "Edit parameters",
        "Modeling",
    )
    .with_shortcut("P"),
    ToolConfig::new(
        "assembly-tree",
        "Assembly Tree",
        "GitBranch",
        "Manage assembly hierarchy",
        "Organization",
    ),
    ToolConfig::new(
        "tolerance",
        "Tolerance Analysis",
        "Target",
        "Analyze tolerances",
        "Analysis",
    ),
    ToolConfig::new(
        "gdt",
        "GD&T Inspector",
        "FileText",
        "Inspect GD&T data",
        "Analysis",
    ),
    ToolConfig::new(
        "section-views",
        "Section Views",
        "Layers",
        "Create technical sections",
        "Visualization",
    ),
    ToolConfig::new(
        "explode",
        "Explode View",
        "Expand",
        "Create exploded views",
        "Visualization",
    ),
];

const CAD_WORKFLOWS: &[WorkflowConfig] = &[
    WorkflowConfig {
        id: "design-review",
        name: "Design Review",
        steps: &["Import CAD", "Check tolerances", "Section analysis", "Report"],
    },
    WorkflowConfig {
        id: "documentation",
        name: "Documentation",
        steps: &["Load assembly", "Create views", "Add annotations", "Export drawings"],
    },
];

const CAD: DomainConfig = DomainConfig {
    id: Domain::Cad,
    name: "CAD / Mechanical",
    icon: "🚗",
    color: "domain-cad",
    description: "CAD models, mechanical parts, assemblies",
    tools: CAD_TOOLS,
    workflows: CAD_WORKFLOWS,
};

const VEGETATION_TOOLS: &[ToolConfig] = &[
    ToolConfig::new(
        "density-paint",
        "Density Painting",
        "Brush",
        "Paint vegetation density",
        "Placement",
    )
    .with_shortcut("D"),
    ToolConfig::new(
        "species",
        "Species Library",
        "Leaf",
        "Manage plant species",
        "Assets",
    ),
    ToolConfig::new(
        "lod-gen",
        "LOD Generation",
        "Layers",
        "Generate LOD levels",
        "Optimization",
    ),
    ToolConfig::new(
        "wind-sim",
        "Wind Simulation",
        "Wind",
        "Simulate wind effects",
        "Physics",
    ),
    ToolConfig::new(
        "seasonal",
        "Seasonal Presets",
        "Sun",
        "Apply seasonal variations",
        "Appearance",
    ),
    ToolConfig::new(
        "terrain",
        "Terrain Tools",
        "Mountain",
        "Edit terrain",
        "Modeling",
    ),
];

const VEGETATION_WORKFLOWS: &[WorkflowConfig] = &[
    WorkflowConfig {
        id: "forest-setup",
        name: "Forest Setup",
        steps: &["Create terrain", "Paint vegetation", "Add wind", "Optimize LODs"],
    },
];

const VEGETATION: DomainConfig = DomainConfig {
    id: Domain::Vegetation,
    name: "Forest / Vegetation",
    icon: "🌲",
    color: "domain-vegetation",
    description: "Trees, plants, forest environments",
    tools: VEGETATION_TOOLS,
    workflows: VEGETATION_WORKFLOWS,
};

const TEXTILE_TOOLS: &[ToolConfig] = &[
    ToolConfig::new(
        "pattern",
        "Pattern Editor",
        "Grid",
        "Edit 2D patterns",
        "Design",
    )
    .with_shortcut("T"),
    ToolConfig::new(
        "seam",
        "Seam Lines",
        "Minus",
        "Define seam lines",
        "Design",
    ),
    ToolConfig::new(
        "fabric-sim",
        "Fabric Simulation",
        "Wind",
        "Simulate fabric physics",
        "Physics",
    ),
    ToolConfig::new(
        "size-grade",
        "Size Grading",
        "Maximize",
        "Grade sizes",
        "Production",
    ),
    ToolConfig::new(
        "print-map",
        "Print Mapping",
        "Image",
        "Map print patterns",
        "Texturing",
    ),
    ToolConfig::new(
        "stitch",
        "Stitch Editor",
        "MoreHorizontal",
        "Edit stitch types",
        "Details",
    ),
];

const TEXTILE_WORKFLOWS: &[WorkflowConfig] = &[
    WorkflowConfig {
        id: "garment",
        name: "Garment Design",
        steps: &["Create pattern", "Define seams", "Simulate fit", "Export"],
    },
];

const TEXTILE: DomainConfig = DomainConfig {
    id: Domain::Textile,
    name: "Textiles / Fashion",
    icon: "🧵",
    color: "domain-textile",
    description: "Clothing, fabrics, fashion design",
    tools: TEXTILE_TOOLS,
    workflows: TEXTILE_WORKFLOWS,
};

const OCEAN_TOOLS: &[ToolConfig] = &[
    ToolConfig::new(
        "wave-sim",
        "Wave Simulation",
        "Activity",
        "Simulate waves",
        "Physics",
    )
    .with_shortcut("V"),
    ToolConfig::new(
        "fluid",
        "Fluid Dynamics",
        "Droplet",
        "Fluid simulation",
        "Physics",
    ),
    ToolConfig::new(
        "buoyancy",
        "Buoyancy Calculator",
        "ArrowUp",
        "Calculate buoyancy",
        "Analysis",
    ),
    ToolConfig::new(
        "currents",
        "Current Editor",
        "Navigation",
        "Define water currents",
        "Physics",
    ),
    ToolConfig::new(
        "caustics",
        "Caustics",
        "Sparkles",
        "Underwater lighting",
        "Rendering",
    ),
    ToolConfig::new(
        "coral",
        "Coral Generator",
        "Flower",
        "Generate coral",
        "Assets",
    ),
];

const OCEAN_WORKFLOWS: &[WorkflowConfig] = &[
    WorkflowConfig {
        id: "underwater",
        name: "Underwater Scene",
        steps: &["Setup ocean", "Add currents", "Place life", "Render caustics"],
    },
];

const OCEAN: DomainConfig = DomainConfig {
    id: Domain::Ocean,
    name: "Ocean / Water",
    icon: "🌊",
    color: "domain-ocean",
    description: "Marine environments, underwater scenes",
    tools: OCEAN_TOOLS,
    workflows: OCEAN_WORKFLOWS,
};

const MINING_TOOLS: &[ToolConfig] = &[
    ToolConfig::new(
        "volume",
        "Volumetric Analysis",
        "Box",
        "Calculate volumes",
        "Analysis",
    )
    .with_shortcut("V"),
    ToolConfig::new(
        "ore-grade",
        "Ore Grade Mapping",
        "Map",
        "Map ore grades",
        "Analysis",
    ),
    ToolConfig::new(
        "blast",
        "Blast Pattern",
        "Zap",
        "Design blast patterns",
        "Planning",
    ),
    ToolConfig::new(
        "tunnel",
        "Tunnel Cross-Section",
        "Circle",
        "Define tunnel sections",
        "Design",
    ),
    ToolConfig::new(
        "stockpile",
        "Stockpile Measurement",
        "Database",
        "Measure stockpiles",
        "Analysis",
    ),
    ToolConfig::new(
        "drill",
        "Drill Planning",
        "ArrowDown",
        "Plan drill holes",
        "Planning",
    ),
];

const MINING_WORKFLOWS: &[WorkflowConfig] = &[
    WorkflowConfig {
        id: "pit-design",
        name: "Pit Design",
        steps: &["Import terrain", "Define pit", "Calculate volumes", "Plan blast"],
    },
];

const MINING: DomainConfig = DomainConfig {
    id: Domain::Mining,
    name: "Mining",
    icon: "⛏️",
    color: "domain-mining",
    description: "Mining operations, geological models",
    tools: MINING_TOOLS,
    workflows: MINING_WORKFLOWS,
};

const AEROSPACE_TOOLS: &[ToolConfig] = &[
    ToolConfig::new(
        "aero",
        "Aerodynamics",
        "Wind",
        "Aerodynamic analysis",
        "Analysis",
    )
    .with_shortcut("A"),
    ToolConfig::new(
        "thermal",
        "Thermal Analysis",
        "Thermometer",
        "Heat distribution",
        "Analysis",
    ),
    ToolConfig::new(
        "orbital",
        "Orbital Paths",
        "Globe",
        "Define orbital paths",
        "Simulation",
    ),
    ToolConfig::new(
        "stress",
        "Material Stress",
        "Activity",
        "Stress analysis",
        "Analysis",
    ),
    ToolConfig::new(
        "deploy",
        "Deployment Sim",
        "Play",
        "Simulate deployment",
        "Simulation",
    ),
    ToolConfig::new(
        "mass",
        "Mass Properties",
        "Scale",
        "Calculate mass",
        "Analysis",
    ),
];

const AEROSPACE_WORKFLOWS: &[WorkflowConfig] = &[
    WorkflowConfig {
        id: "flight-analysis",
        name: "Flight Analysis",
        steps: &["Import model", "Run aerodynamics", "Check thermal", "Report"],
    },
];

const AEROSPACE: DomainConfig = DomainConfig {
    id: Domain::Aerospace,
    name: "Space / Aerospace",
    icon: "🚀",
    color: "domain-aerospace",
    description: "Aircraft, spacecraft, satellites",
    tools: AEROSPACE_TOOLS,
    workflows: AEROSPACE_WORKFLOWS,
};

const GAMING_TOOLS: &[ToolConfig] = &[
    ToolConfig::new(
        "lod",
        "LOD Generation",
        "Layers",
        "Generate LOD levels",
        "Optimization",
    )
    .with_shortcut("L"),
    ToolConfig::new(
        "uv",
        "UV Unwrapping",
        "Grid",
        "Unwrap UVs",
        "Texturing",
    )
    .with_shortcut("U"),
    ToolConfig::new(
        "pbr",
        "PBR Material",
        "Palette",
        "Edit PBR materials",
        "Materials",
    ),
    ToolConfig::new(
        "retarget",
        "Animation Retarget",
        "RefreshCw",
        "Retarget animations",
        "Animation",
    ),
    ToolConfig::new(
        "lightmap",
        "Lightmap Baking",
        "Sun",
        "Bake lightmaps",
        "Rendering",
    ),
    ToolConfig::new(
        "collision",
        "Collision Mesh",
        "Shield",
        "Generate colliders",
        "Physics",
    ),
];

const GAMING_WORKFLOWS: &[WorkflowConfig] = &[
    WorkflowConfig {
        id: "asset-prep",
        name: "Asset Preparation",
        steps: &["Import model", "Unwrap UVs", "Setup materials", "Generate LODs", "Export"],
    },
];

const GAMING: DomainConfig = DomainConfig {
    id: Domain::Gaming,
    name: "Gaming",
    icon: "🎮",
    color: "domain-gaming",
    description: "Game assets, real-time rendering",
    tools: GAMING_TOOLS,
    workflows: GAMING_WORKFLOWS,
};

const FILM_TOOLS: &[ToolConfig] = &[
    ToolConfig::new(
        "camera-track",
        "Camera Tracking",
        "Video",
        "Track camera motion",
        "Animation",
    )
    .with_shortcut("C"),
    ToolConfig::new(
        "motion-blur",
        "Motion Blur",
        "Zap",
        "Configure motion blur",
        "Rendering",
    ),
    ToolConfig::new(
        "dof",
        "Depth of Field",
        "Aperture",
        "Adjust depth of field",
        "Rendering",
    ),
    ToolConfig::new(
        "composite",
        "Compositing",
        "Layers",
        "Composite layers",
        "Post",
    ),
    ToolConfig::new(
        "render-layers",
        "Render Layers",
        "Stack",
        "Setup render passes",
        "Rendering",
    ),
    ToolConfig::new(
        "matchmove",
        "Matchmove",
        "Target",
        "Match camera to footage",
        "Animation",
    ),
];

const FILM_WORKFLOWS: &[WorkflowConfig] = &[
    WorkflowConfig {
        id: "vfx-shot",
        name: "VFX Shot",
        steps: &["Track footage", "Import assets", "Composite", "Render passes"],
    },
];

const FILM: DomainConfig = DomainConfig {
    id: Domain::Film,
    name: "Film / VFX",
    icon: "🎬",
    color: "domain-film",
    description: "Visual effects, cinematography",
    tools: FILM_TOOLS,
    workflows: FILM_WORKFLOWS,
};

const MEDICAL_TOOLS: &[ToolConfig] = &[
    ToolConfig::new(
        "slice",
        "Slice Viewer",
        "Scan",
        "View CT/MRI slices",
        "Visualization",
    ),
    ToolConfig::new(
        "segment",
        "Segmentation",
        "Scissors",
        "Segment anatomy",
        "Analysis",
    ),
    ToolConfig::new(
        "measure-3d",
        "3D Measurements",
        "Ruler",
        "Measure anatomy",
        "Analysis",
    ),
    ToolConfig::new(
        "annotate",
        "Annotations",
        "MessageSquare",
        "Add annotations",
        "Documentation",
    ),
];

const MEDICAL_WORKFLOWS: &[WorkflowConfig] = &[
    WorkflowConfig {
        id: "review",
        name: "Medical Review",
        steps: &["Load DICOM", "Segment regions", "Measure", "Report"],
    },
];

const MEDICAL: DomainConfig = DomainConfig {
    id: Domain::Medical,
    name: "Medical",
    icon: "🏥",
    color: "domain-building",
    description: "Medical imaging, anatomical models",
    tools: MEDICAL_TOOLS,
    workflows: MEDICAL_WORKFLOWS,
};

const PRODUCT_TOOLS: &[ToolConfig] = &[
    ToolConfig::new(
        "material",
        "Material Editor",
        "Palette",
        "Edit materials",
        "Materials",
    ),
    ToolConfig::new(
        "render",
        "Product Render",
        "Camera",
        "Render product shots",
        "Rendering",
    ),
    ToolConfig::new(
        "turntable",
        "Turntable",
        "RotateCw",
        "Create turntables",
        "Animation",
    ),
    ToolConfig::new(
        "ar-preview",
        "AR Preview",
        "Smartphone",
        "Preview in AR",
        "Visualization",
    ),
];

const PRODUCT_WORKFLOWS: &[WorkflowConfig] = &[
    WorkflowConfig {
        id: "product-viz",
        name: "Product Visualization",
        steps: &["Import model", "Setup materials", "Light scene", "Render"],
    },
];

const PRODUCT: DomainConfig = DomainConfig {
    id: Domain::Product,
    name: "Product Design",
    icon: "📦",
    color: "domain-cad",
    description: "Consumer products, industrial design",
    tools: PRODUCT_TOOLS,
    workflows: PRODUCT_WORKFLOWS,
};

const FURNITURE_TOOLS: &[ToolConfig] = &[
    ToolConfig::new(
        "dimension",
        "Dimensions",
        "Ruler",
        "Add dimensions",
        "Documentation",
    ),
    ToolConfig::new(
        "material",
        "Material Library",
        "Palette",
        "Apply materials",
        "Materials",
    ),
    ToolConfig::new(
        "configurator",
        "Configurator",
        "Settings",
        "Product variants",
        "Configuration",
    ),
    ToolConfig::new(
        "room-place",
        "Room Placement",
        "Home",
        "Place in room",
        "Visualization",
    ),
];

const FURNITURE_WORKFLOWS: &[WorkflowConfig] = &[
    WorkflowConfig {
        id: "furniture-design",
        name: "Furniture Design",
        steps: &["Model", "Apply materials", "Add dimensions", "Render"],
    },
];

const FURNITURE: DomainConfig = DomainConfig {
    id: Domain::Furniture,
    name: "Furniture",
    icon: "🪑",
    color: "domain-textile",
    description: "Furniture design, interior objects",
    tools: FURNITURE_TOOLS,
    workflows: FURNITURE_WORKFLOWS,
};

const JEWELRY_TOOLS: &[ToolConfig] = &[
    ToolConfig::new(
        "gem",
        "Gem Editor",
        "Diamond",
        "Edit gemstones",
        "Modeling",
    ),
    ToolConfig::new(
        "prong",
        "Prong Settings",
        "Circle",
        "Create prong settings",
        "Modeling",
    ),
    ToolConfig::new(
        "metal",
        "Metal Materials",
        "Palette",
        "Precious metals",
        "Materials",
    ),
    ToolConfig::new(
        "ring-sizer",
        "Ring Sizer",
        "Circle",
        "Size rings",
        "Tools",
    ),
];

const JEWELRY_WORKFLOWS: &[WorkflowConfig] = &[
    WorkflowConfig {
        id: "ring-design",
        name: "Ring Design",
        steps: &["Create band", "Add setting", "Place gem", "Render"],
    },
];

const JEWELRY: DomainConfig = DomainConfig {
    id: Domain::Jewelry,
    name: "Jewelry",
    icon: "💎",
    color: "domain-textile",
    description: "Jewelry design, gemstones",
    tools: JEWELRY_TOOLS,
    workflows: JEWELRY_WORKFLOWS,
};

const UNKNOWN_TOOLS: &[ToolConfig] = &[
    ToolConfig::new(
        "select",
        "Select",
        "MousePointer",
        "Select objects",
        "Selection",
    )
    .with_shortcut("Q"),
    ToolConfig::new(
        "move",
        "Move",
        "Move",
        "Move objects",
        "Transform",
    )
    .with_shortcut("G"),
    ToolConfig::new(
        "rotate",
        "Rotate",
        "RotateCw",
        "Rotate objects",
        "Transform",
    )
    .with_shortcut("R"),
    ToolConfig::new(
        "scale",
        "Scale",
        "Maximize",
        "Scale objects",
        "Transform",
    )
    .with_shortcut("S"),
    ToolConfig::new(
        "measure",
        "Measure",
        "Ruler",
        "Measure distances",
        "Analysis",
    )
    .with_shortcut("M"),
    ToolConfig::new(
        "material",
        "Materials",
        "Palette",
        "Edit materials",
        "Materials",
    ),
];

const UNKNOWN_WORKFLOWS: &[WorkflowConfig] = &[
    WorkflowConfig {
        id: "basic",
        name: "Basic Editing",
        steps: &["Import model", "Transform", "Edit materials", "Export"],
    },
];

const UNKNOWN: DomainConfig = DomainConfig {
    id: Domain::Unknown,
    name: "General",
    icon: "📁",
    color: "primary",
    description: "General 3D editing tools",
    tools: UNKNOWN_TOOLS,
    workflows: UNKNOWN_WORKFLOWS,
};
