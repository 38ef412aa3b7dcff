// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC entity schema
//!
//! Every known entity kind is declared once in the `ifc_schema!` table below.
//! The macro generates the [`IfcType`] enum together with its STEP keyword,
//! class name, [`SchemaKind`] and ordered attribute names (IFC4 naming), so a
//! decoded entity carries its type tag from construction onwards.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Broad category of an entity kind
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SchemaKind {
    /// Project, site, building, storey, space
    Spatial,
    /// Physical building elements
    Element,
    /// Element type objects
    ElementType,
    /// Objectified relationships
    Relationship,
    /// Property sets, properties and quantities
    Property,
    /// Units, actors, materials, owner history
    Resource,
    /// Geometric representation: points, curves, solids, placements, styling
    Geometry,
}

macro_rules! ifc_schema {
    ($( $variant:ident = $keyword:literal, $kind:ident, [$($attr:literal),* $(,)?]; )*) => {
        /// IFC entity type
        ///
        /// Keywords not present in the schema table are kept as
        /// `Unknown(KEYWORD)`.
        #[derive(Clone, PartialEq, Eq, Hash, Debug)]
        pub enum IfcType {
            $( $variant, )*
            Unknown(String),
        }

        impl IfcType {
            /// Parse a STEP keyword (case-insensitive)
            pub fn parse(s: &str) -> Self {
                let upper = s.to_ascii_uppercase();
                match upper.as_str() {
                    $( $keyword => IfcType::$variant, )*
                    _ => IfcType::Unknown(upper),
                }
            }

            /// STEP keyword, e.g. `IFCWALL`
            pub fn keyword(&self) -> &str {
                match self {
                    $( IfcType::$variant => $keyword, )*
                    IfcType::Unknown(s) => s,
                }
            }

            /// Class name, e.g. `IfcWall`
            ///
            /// Unknown kinds report their raw keyword since the word
            /// boundaries of an upper-case keyword cannot be recovered.
            pub fn class_name(&self) -> &str {
                match self {
                    $( IfcType::$variant => stringify!($variant), )*
                    IfcType::Unknown(s) => s,
                }
            }

            /// Schema category
            pub fn kind(&self) -> Option<SchemaKind> {
                match self {
                    $( IfcType::$variant => Some(SchemaKind::$kind), )*
                    IfcType::Unknown(_) => None,
                }
            }

            /// Declared attribute names in STEP order
            pub fn attribute_names(&self) -> &'static [&'static str] {
                match self {
                    $( IfcType::$variant => &[$($attr),*], )*
                    IfcType::Unknown(_) => &[],
                }
            }

            /// Every known entity kind
            pub fn known() -> &'static [IfcType] {
                const KNOWN: &[IfcType] = &[$( IfcType::$variant, )*];
                KNOWN
            }
        }
    };
}

ifc_schema! {
    // Spatial structure
    IfcProject = "IFCPROJECT", Spatial, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "LongName", "Phase", "RepresentationContexts", "UnitsInContext"];
    IfcSite = "IFCSITE", Spatial, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "LongName", "CompositionType", "RefLatitude", "RefLongitude", "RefElevation", "LandTitleNumber", "SiteAddress"];
    IfcBuilding = "IFCBUILDING", Spatial, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "LongName", "CompositionType", "ElevationOfRefHeight", "ElevationOfTerrain", "BuildingAddress"];
    IfcBuildingStorey = "IFCBUILDINGSTOREY", Spatial, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "LongName", "CompositionType", "Elevation"];
    IfcSpace = "IFCSPACE", Spatial, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "LongName", "CompositionType", "PredefinedType", "ElevationWithFlooring"];

    // Building elements
    IfcWall = "IFCWALL", Element, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "Tag", "PredefinedType"];
    IfcWallStandardCase = "IFCWALLSTANDARDCASE", Element, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "Tag", "PredefinedType"];
    IfcCurtainWall = "IFCCURTAINWALL", Element, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "Tag", "PredefinedType"];
    IfcSlab = "IFCSLAB", Element, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "Tag", "PredefinedType"];
    IfcRoof = "IFCROOF", Element, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "Tag", "PredefinedType"];
    IfcBeam = "IFCBEAM", Element, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "Tag", "PredefinedType"];
    IfcColumn = "IFCCOLUMN", Element, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "Tag", "PredefinedType"];
    IfcMember = "IFCMEMBER", Element, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "Tag", "PredefinedType"];
    IfcPlate = "IFCPLATE", Element, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "Tag", "PredefinedType"];
    IfcCovering = "IFCCOVERING", Element, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "Tag", "PredefinedType"];
    IfcRailing = "IFCRAILING", Element, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "Tag", "PredefinedType"];
    IfcFooting = "IFCFOOTING", Element, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "Tag", "PredefinedType"];
    IfcStair = "IFCSTAIR", Element, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "Tag", "PredefinedType"];
    IfcStairFlight = "IFCSTAIRFLIGHT", Element, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "Tag", "NumberOfRisers", "NumberOfTreads", "RiserHeight", "TreadLength", "PredefinedType"];
    IfcRamp = "IFCRAMP", Element, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "Tag", "PredefinedType"];
    IfcRampFlight = "IFCRAMPFLIGHT", Element, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "Tag", "PredefinedType"];
    IfcDoor = "IFCDOOR", Element, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "Tag", "OverallHeight", "OverallWidth", "PredefinedType", "OperationType", "UserDefinedOperationType"];
    IfcWindow = "IFCWINDOW", Element, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "Tag", "OverallHeight", "OverallWidth", "PredefinedType", "PartitioningType", "UserDefinedPartitioningType"];
    IfcBuildingElementProxy = "IFCBUILDINGELEMENTPROXY", Element, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "Tag", "PredefinedType"];
    IfcFurnishingElement = "IFCFURNISHINGELEMENT", Element, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "Tag"];
    IfcOpeningElement = "IFCOPENINGELEMENT", Element, ["GlobalId", "OwnerHistory", "Name", "Description", "ObjectType", "ObjectPlacement", "Representation", "Tag", "PredefinedType"];

    // Element types
    IfcWallType = "IFCWALLTYPE", ElementType, ["GlobalId", "OwnerHistory", "Name", "Description", "ApplicableOccurrence", "HasPropertySets", "RepresentationMaps", "Tag", "ElementType", "PredefinedType"];
    IfcSlabType = "IFCSLABTYPE", ElementType, ["GlobalId", "OwnerHistory", "Name", "Description", "ApplicableOccurrence", "HasPropertySets", "RepresentationMaps", "Tag", "ElementType", "PredefinedType"];
    IfcBeamType = "IFCBEAMTYPE", ElementType, ["GlobalId", "OwnerHistory", "Name", "Description", "ApplicableOccurrence", "HasPropertySets", "RepresentationMaps", "Tag", "ElementType", "PredefinedType"];
    IfcColumnType = "IFCCOLUMNTYPE", ElementType, ["GlobalId", "OwnerHistory", "Name", "Description", "ApplicableOccurrence", "HasPropertySets", "RepresentationMaps", "Tag", "ElementType", "PredefinedType"];
    IfcMemberType = "IFCMEMBERTYPE", ElementType, ["GlobalId", "OwnerHistory", "Name", "Description", "ApplicableOccurrence", "HasPropertySets", "RepresentationMaps", "Tag", "ElementType", "PredefinedType"];
    IfcPlateType = "IFCPLATETYPE", ElementType, ["GlobalId", "OwnerHistory", "Name", "Description", "ApplicableOccurrence", "HasPropertySets", "RepresentationMaps", "Tag", "ElementType", "PredefinedType"];
    IfcDoorType = "IFCDOORTYPE", ElementType, ["GlobalId", "OwnerHistory", "Name", "Description", "ApplicableOccurrence", "HasPropertySets", "RepresentationMaps", "Tag", "ElementType", "PredefinedType", "OperationType", "ParameterTakesPrecedence", "UserDefinedOperationType"];
    IfcWindowType = "IFCWINDOWTYPE", ElementType, ["GlobalId", "OwnerHistory", "Name", "Description", "ApplicableOccurrence", "HasPropertySets", "RepresentationMaps", "Tag", "ElementType", "PredefinedType", "PartitioningType", "ParameterTakesPrecedence", "UserDefinedPartitioningType"];

    // Relationships
    IfcRelAggregates = "IFCRELAGGREGATES", Relationship, ["GlobalId", "OwnerHistory", "Name", "Description", "RelatingObject", "RelatedObjects"];
    IfcRelContainedInSpatialStructure = "IFCRELCONTAINEDINSPATIALSTRUCTURE", Relationship, ["GlobalId", "OwnerHistory", "Name", "Description", "RelatedElements", "RelatingStructure"];
    IfcRelDefinesByProperties = "IFCRELDEFINESBYPROPERTIES", Relationship, ["GlobalId", "OwnerHistory", "Name", "Description", "RelatedObjects", "RelatingPropertyDefinition"];
    IfcRelDefinesByType = "IFCRELDEFINESBYTYPE", Relationship, ["GlobalId", "OwnerHistory", "Name", "Description", "RelatedObjects", "RelatingType"];
    IfcRelAssociatesMaterial = "IFCRELASSOCIATESMATERIAL", Relationship, ["GlobalId", "OwnerHistory", "Name", "Description", "RelatedObjects", "RelatingMaterial"];
    IfcRelVoidsElement = "IFCRELVOIDSELEMENT", Relationship, ["GlobalId", "OwnerHistory", "Name", "Description", "RelatingBuildingElement", "RelatedOpeningElement"];
    IfcRelFillsElement = "IFCRELFILLSELEMENT", Relationship, ["GlobalId", "OwnerHistory", "Name", "Description", "RelatingOpeningElement", "RelatedBuildingElement"];
    IfcRelSpaceBoundary = "IFCRELSPACEBOUNDARY", Relationship, ["GlobalId", "OwnerHistory", "Name", "Description", "RelatingSpace", "RelatedBuildingElement", "ConnectionGeometry", "PhysicalOrVirtualBoundary", "InternalOrExternalBoundary"];

    // Properties and quantities
    IfcPropertySet = "IFCPROPERTYSET", Property, ["GlobalId", "OwnerHistory", "Name", "Description", "HasProperties"];
    IfcPropertySingleValue = "IFCPROPERTYSINGLEVALUE", Property, ["Name", "Description", "NominalValue", "Unit"];
    IfcPropertyEnumeratedValue = "IFCPROPERTYENUMERATEDVALUE", Property, ["Name", "Description", "EnumerationValues", "EnumerationReference"];
    IfcElementQuantity = "IFCELEMENTQUANTITY", Property, ["GlobalId", "OwnerHistory", "Name", "Description", "MethodOfMeasurement", "Quantities"];
    IfcQuantityLength = "IFCQUANTITYLENGTH", Property, ["Name", "Description", "Unit", "LengthValue", "Formula"];
    IfcQuantityArea = "IFCQUANTITYAREA", Property, ["Name", "Description", "Unit", "AreaValue", "Formula"];
    IfcQuantityVolume = "IFCQUANTITYVOLUME", Property, ["Name", "Description", "Unit", "VolumeValue", "Formula"];
    IfcQuantityCount = "IFCQUANTITYCOUNT", Property, ["Name", "Description", "Unit", "CountValue", "Formula"];
    IfcQuantityWeight = "IFCQUANTITYWEIGHT", Property, ["Name", "Description", "Unit", "WeightValue", "Formula"];

    // Resources
    IfcOwnerHistory = "IFCOWNERHISTORY", Resource, ["OwningUser", "OwningApplication", "State", "ChangeAction", "LastModifiedDate", "LastModifyingUser", "LastModifyingApplication", "CreationDate"];
    IfcPerson = "IFCPERSON", Resource, ["Identification", "FamilyName", "GivenName", "MiddleNames", "PrefixTitles", "SuffixTitles", "Roles", "Addresses"];
    IfcOrganization = "IFCORGANIZATION", Resource, ["Identification", "Name", "Description", "Roles", "Addresses"];
    IfcPersonAndOrganization = "IFCPERSONANDORGANIZATION", Resource, ["ThePerson", "TheOrganization", "Roles"];
    IfcApplication = "IFCAPPLICATION", Resource, ["ApplicationDeveloper", "Version", "ApplicationFullName", "ApplicationIdentifier"];
    IfcUnitAssignment = "IFCUNITASSIGNMENT", Resource, ["Units"];
    IfcSIUnit = "IFCSIUNIT", Resource, ["Dimensions", "UnitType", "Prefix", "Name"];
    IfcConversionBasedUnit = "IFCCONVERSIONBASEDUNIT", Resource, ["Dimensions", "UnitType", "Name", "ConversionFactor"];
    IfcDimensionalExponents = "IFCDIMENSIONALEXPONENTS", Resource, ["LengthExponent", "MassExponent", "TimeExponent", "ElectricCurrentExponent", "ThermodynamicTemperatureExponent", "AmountOfSubstanceExponent", "LuminousIntensityExponent"];
    IfcMeasureWithUnit = "IFCMEASUREWITHUNIT", Resource, ["ValueComponent", "UnitComponent"];
    IfcMaterial = "IFCMATERIAL", Resource, ["Name", "Description", "Category"];
    IfcMaterialLayer = "IFCMATERIALLAYER", Resource, ["Material", "LayerThickness", "IsVentilated", "Name", "Description", "Category", "Priority"];
    IfcMaterialLayerSet = "IFCMATERIALLAYERSET", Resource, ["MaterialLayers", "LayerSetName", "Description"];
    IfcMaterialLayerSetUsage = "IFCMATERIALLAYERSETUSAGE", Resource, ["ForLayerSet", "LayerSetDirection", "DirectionSense", "OffsetFromReferenceLine", "ReferenceExtent"];
    IfcPresentationLayerAssignment = "IFCPRESENTATIONLAYERASSIGNMENT", Resource, ["Name", "Description", "AssignedItems", "Identifier"];

    // Points, directions and placements
    IfcCartesianPoint = "IFCCARTESIANPOINT", Geometry, ["Coordinates"];
    IfcDirection = "IFCDIRECTION", Geometry, ["DirectionRatios"];
    IfcVector = "IFCVECTOR", Geometry, ["Orientation", "Magnitude"];
    IfcAxis2Placement2D = "IFCAXIS2PLACEMENT2D", Geometry, ["Location", "RefDirection"];
    IfcAxis2Placement3D = "IFCAXIS2PLACEMENT3D", Geometry, ["Location", "Axis", "RefDirection"];
    IfcLocalPlacement = "IFCLOCALPLACEMENT", Geometry, ["PlacementRelTo", "RelativePlacement"];
    IfcCartesianTransformationOperator3D = "IFCCARTESIANTRANSFORMATIONOPERATOR3D", Geometry, ["Axis1", "Axis2", "LocalOrigin", "Scale", "Axis3"];
    IfcCartesianPointList3D = "IFCCARTESIANPOINTLIST3D", Geometry, ["CoordList", "TagList"];
    IfcAxis1Placement = "IFCAXIS1PLACEMENT", Geometry, ["Location", "Axis"];
    IfcCartesianPointList2D = "IFCCARTESIANPOINTLIST2D", Geometry, ["CoordList", "TagList"];
    IfcCartesianTransformationOperator2D = "IFCCARTESIANTRANSFORMATIONOPERATOR2D", Geometry, ["Axis1", "Axis2", "LocalOrigin", "Scale"];
    IfcCartesianTransformationOperator3DnonUniform = "IFCCARTESIANTRANSFORMATIONOPERATOR3DNONUNIFORM", Geometry, ["Axis1", "Axis2", "LocalOrigin", "Scale", "Axis3", "Scale2", "Scale3"];

    // Representation structure
    IfcGeometricRepresentationContext = "IFCGEOMETRICREPRESENTATIONCONTEXT", Geometry, ["ContextIdentifier", "ContextType", "CoordinateSpaceDimension", "Precision", "WorldCoordinateSystem", "TrueNorth"];
    IfcGeometricRepresentationSubContext = "IFCGEOMETRICREPRESENTATIONSUBCONTEXT", Geometry, ["ContextIdentifier", "ContextType", "CoordinateSpaceDimension", "Precision", "WorldCoordinateSystem", "TrueNorth", "ParentContext", "TargetScale", "TargetView", "UserDefinedTargetView"];
    IfcShapeRepresentation = "IFCSHAPEREPRESENTATION", Geometry, ["ContextOfItems", "RepresentationIdentifier", "RepresentationType", "Items"];
    IfcProductDefinitionShape = "IFCPRODUCTDEFINITIONSHAPE", Geometry, ["Name", "Description", "Representations"];
    IfcRepresentationMap = "IFCREPRESENTATIONMAP", Geometry, ["MappingOrigin", "MappedRepresentation"];
    IfcMappedItem = "IFCMAPPEDITEM", Geometry, ["MappingSource", "MappingTarget"];
    IfcBoundingBox = "IFCBOUNDINGBOX", Geometry, ["Corner", "XDim", "YDim", "ZDim"];
    IfcTopologyRepresentation = "IFCTOPOLOGYREPRESENTATION", Geometry, ["ContextOfItems", "RepresentationIdentifier", "RepresentationType", "Items"];
    IfcGeometricSet = "IFCGEOMETRICSET", Geometry, ["Elements"];
    IfcGeometricCurveSet = "IFCGEOMETRICCURVESET", Geometry, ["Elements"];

    // Curves
    IfcPolyline = "IFCPOLYLINE", Geometry, ["Points"];
    IfcLine = "IFCLINE", Geometry, ["Pnt", "Dir"];
    IfcCircle = "IFCCIRCLE", Geometry, ["Position", "Radius"];
    IfcTrimmedCurve = "IFCTRIMMEDCURVE", Geometry, ["BasisCurve", "Trim1", "Trim2", "SenseAgreement", "MasterRepresentation"];
    IfcCompositeCurve = "IFCCOMPOSITECURVE", Geometry, ["Segments", "SelfIntersect"];
    IfcCompositeCurveSegment = "IFCCOMPOSITECURVESEGMENT", Geometry, ["Transition", "SameSense", "ParentCurve"];
    IfcEllipse = "IFCELLIPSE", Geometry, ["Position", "SemiAxis1", "SemiAxis2"];
    IfcBSplineCurveWithKnots = "IFCBSPLINECURVEWITHKNOTS", Geometry, ["Degree", "ControlPointsList", "CurveForm", "ClosedCurve", "SelfIntersect", "KnotMultiplicities", "Knots", "KnotSpec"];
    IfcRationalBSplineCurveWithKnots = "IFCRATIONALBSPLINECURVEWITHKNOTS", Geometry, ["Degree", "ControlPointsList", "CurveForm", "ClosedCurve", "SelfIntersect", "KnotMultiplicities", "Knots", "KnotSpec", "WeightsData"];
    IfcIndexedPolyCurve = "IFCINDEXEDPOLYCURVE", Geometry, ["Points", "Segments", "SelfIntersect"];
    IfcOffsetCurve2D = "IFCOFFSETCURVE2D", Geometry, ["BasisCurve", "Distance", "SelfIntersect"];
    IfcOffsetCurve3D = "IFCOFFSETCURVE3D", Geometry, ["BasisCurve", "Distance", "SelfIntersect", "RefDirection"];
    IfcPcurve = "IFCPCURVE", Geometry, ["BasisSurface", "ReferenceCurve"];

    // Profiles
    IfcRectangleProfileDef = "IFCRECTANGLEPROFILEDEF", Geometry, ["ProfileType", "ProfileName", "Position", "XDim", "YDim"];
    IfcCircleProfileDef = "IFCCIRCLEPROFILEDEF", Geometry, ["ProfileType", "ProfileName", "Position", "Radius"];
    IfcIShapeProfileDef = "IFCISHAPEPROFILEDEF", Geometry, ["ProfileType", "ProfileName", "Position", "OverallWidth", "OverallDepth", "WebThickness", "FlangeThickness", "FilletRadius", "FlangeEdgeRadius", "FlangeSlope"];
    IfcArbitraryClosedProfileDef = "IFCARBITRARYCLOSEDPROFILEDEF", Geometry, ["ProfileType", "ProfileName", "OuterCurve"];
    IfcArbitraryProfileDefWithVoids = "IFCARBITRARYPROFILEDEFWITHVOIDS", Geometry, ["ProfileType", "ProfileName", "OuterCurve", "InnerCurves"];
    IfcArbitraryOpenProfileDef = "IFCARBITRARYOPENPROFILEDEF", Geometry, ["ProfileType", "ProfileName", "Curve"];
    IfcCenterLineProfileDef = "IFCCENTERLINEPROFILEDEF", Geometry, ["ProfileType", "ProfileName", "Curve", "Thickness"];
    IfcRectangleHollowProfileDef = "IFCRECTANGLEHOLLOWPROFILEDEF", Geometry, ["ProfileType", "ProfileName", "Position", "XDim", "YDim", "WallThickness", "InnerFilletRadius", "OuterFilletRadius"];
    IfcRoundedRectangleProfileDef = "IFCROUNDEDRECTANGLEPROFILEDEF", Geometry, ["ProfileType", "ProfileName", "Position", "XDim", "YDim", "RoundingRadius"];
    IfcCircleHollowProfileDef = "IFCCIRCLEHOLLOWPROFILEDEF", Geometry, ["ProfileType", "ProfileName", "Position", "Radius", "WallThickness"];
    IfcEllipseProfileDef = "IFCELLIPSEPROFILEDEF", Geometry, ["ProfileType", "ProfileName", "Position", "SemiAxis1", "SemiAxis2"];
    IfcLShapeProfileDef = "IFCLSHAPEPROFILEDEF", Geometry, ["ProfileType", "ProfileName", "Position", "Depth", "Width", "Thickness", "FilletRadius", "EdgeRadius", "LegSlope"];
    IfcTShapeProfileDef = "IFCTSHAPEPROFILEDEF", Geometry, ["ProfileType", "ProfileName", "Position", "Depth", "FlangeWidth", "WebThickness", "FlangeThickness", "FilletRadius", "FlangeEdgeRadius", "WebEdgeRadius", "WebSlope", "FlangeSlope"];
    IfcUShapeProfileDef = "IFCUSHAPEPROFILEDEF", Geometry, ["ProfileType", "ProfileName", "Position", "Depth", "FlangeWidth", "WebThickness", "FlangeThickness", "FilletRadius", "EdgeRadius", "FlangeSlope"];
    IfcCShapeProfileDef = "IFCCSHAPEPROFILEDEF", Geometry, ["ProfileType", "ProfileName", "Position", "Depth", "Width", "WallThickness", "Girth", "InternalFilletRadius"];
    IfcZShapeProfileDef = "IFCZSHAPEPROFILEDEF", Geometry, ["ProfileType", "ProfileName", "Position", "Depth", "FlangeWidth", "WebThickness", "FlangeThickness", "FilletRadius", "EdgeRadius"];
    IfcAsymmetricIShapeProfileDef = "IFCASYMMETRICISHAPEPROFILEDEF", Geometry, ["ProfileType", "ProfileName", "Position", "BottomFlangeWidth", "OverallDepth", "WebThickness", "BottomFlangeThickness", "BottomFlangeFilletRadius", "TopFlangeWidth", "TopFlangeThickness", "TopFlangeFilletRadius", "BottomFlangeEdgeRadius", "BottomFlangeSlope", "TopFlangeEdgeRadius", "TopFlangeSlope"];
    IfcTrapeziumProfileDef = "IFCTRAPEZIUMPROFILEDEF", Geometry, ["ProfileType", "ProfileName", "Position", "BottomXDim", "TopXDim", "YDim", "TopXOffset"];
    IfcCompositeProfileDef = "IFCCOMPOSITEPROFILEDEF", Geometry, ["ProfileType", "ProfileName", "Profiles", "Label"];
    IfcDerivedProfileDef = "IFCDERIVEDPROFILEDEF", Geometry, ["ProfileType", "ProfileName", "ParentProfile", "Operator", "Label"];

    // Solids and surfaces
    IfcExtrudedAreaSolid = "IFCEXTRUDEDAREASOLID", Geometry, ["SweptArea", "Position", "ExtrudedDirection", "Depth"];
    IfcExtrudedAreaSolidTapered = "IFCEXTRUDEDAREASOLIDTAPERED", Geometry, ["SweptArea", "Position", "ExtrudedDirection", "Depth", "EndSweptArea"];
    IfcRevolvedAreaSolid = "IFCREVOLVEDAREASOLID", Geometry, ["SweptArea", "Position", "Axis", "Angle"];
    IfcRevolvedAreaSolidTapered = "IFCREVOLVEDAREASOLIDTAPERED", Geometry, ["SweptArea", "Position", "Axis", "Angle", "EndSweptArea"];
    IfcSurfaceCurveSweptAreaSolid = "IFCSURFACECURVESWEPTAREASOLID", Geometry, ["SweptArea", "Position", "Directrix", "StartParam", "EndParam", "ReferenceSurface"];
    IfcFixedReferenceSweptAreaSolid = "IFCFIXEDREFERENCESWEPTAREASOLID", Geometry, ["SweptArea", "Position", "Directrix", "StartParam", "EndParam", "FixedReference"];
    IfcSweptDiskSolid = "IFCSWEPTDISKSOLID", Geometry, ["Directrix", "Radius", "InnerRadius", "StartParam", "EndParam"];
    IfcSweptDiskSolidPolygonal = "IFCSWEPTDISKSOLIDPOLYGONAL", Geometry, ["Directrix", "Radius", "InnerRadius", "StartParam", "EndParam", "FilletRadius"];
    IfcBlock = "IFCBLOCK", Geometry, ["Position", "XLength", "YLength", "ZLength"];
    IfcRectangularPyramid = "IFCRECTANGULARPYRAMID", Geometry, ["Position", "XLength", "YLength", "Height"];
    IfcRightCircularCone = "IFCRIGHTCIRCULARCONE", Geometry, ["Position", "Height", "BottomRadius"];
    IfcRightCircularCylinder = "IFCRIGHTCIRCULARCYLINDER", Geometry, ["Position", "Height", "Radius"];
    IfcSphere = "IFCSPHERE", Geometry, ["Position", "Radius"];
    IfcCsgSolid = "IFCCSGSOLID", Geometry, ["TreeRootExpression"];
    IfcFacetedBrep = "IFCFACETEDBREP", Geometry, ["Outer"];
    IfcFacetedBrepWithVoids = "IFCFACETEDBREPWITHVOIDS", Geometry, ["Outer", "Voids"];
    IfcAdvancedBrep = "IFCADVANCEDBREP", Geometry, ["Outer"];
    IfcAdvancedBrepWithVoids = "IFCADVANCEDBREPWITHVOIDS", Geometry, ["Outer", "Voids"];
    IfcShellBasedSurfaceModel = "IFCSHELLBASEDSURFACEMODEL", Geometry, ["SbsmBoundary"];
    IfcFaceBasedSurfaceModel = "IFCFACEBASEDSURFACEMODEL", Geometry, ["FbsmFaces"];
    IfcConnectedFaceSet = "IFCCONNECTEDFACESET", Geometry, ["CfsFaces"];
    IfcClosedShell = "IFCCLOSEDSHELL", Geometry, ["CfsFaces"];
    IfcOpenShell = "IFCOPENSHELL", Geometry, ["CfsFaces"];
    IfcFace = "IFCFACE", Geometry, ["Bounds"];
    IfcFaceSurface = "IFCFACESURFACE", Geometry, ["Bounds", "FaceSurface", "SameSense"];
    IfcAdvancedFace = "IFCADVANCEDFACE", Geometry, ["Bounds", "FaceSurface", "SameSense"];
    IfcFaceBound = "IFCFACEBOUND", Geometry, ["Bound", "Orientation"];
    IfcFaceOuterBound = "IFCFACEOUTERBOUND", Geometry, ["Bound", "Orientation"];
    IfcPolyLoop = "IFCPOLYLOOP", Geometry, ["Polygon"];
    IfcEdgeLoop = "IFCEDGELOOP", Geometry, ["EdgeList"];
    IfcOrientedEdge = "IFCORIENTEDEDGE", Geometry, ["EdgeStart", "EdgeEnd", "EdgeElement", "Orientation"];
    IfcEdgeCurve = "IFCEDGECURVE", Geometry, ["EdgeStart", "EdgeEnd", "EdgeGeometry", "SameSense"];
    IfcVertexPoint = "IFCVERTEXPOINT", Geometry, ["VertexGeometry"];
    IfcPlane = "IFCPLANE", Geometry, ["Position"];
    IfcCurveBoundedPlane = "IFCCURVEBOUNDEDPLANE", Geometry, ["BasisSurface", "OuterBoundary", "InnerBoundaries"];
    IfcCylindricalSurface = "IFCCYLINDRICALSURFACE", Geometry, ["Position", "Radius"];
    IfcSurfaceOfLinearExtrusion = "IFCSURFACEOFLINEAREXTRUSION", Geometry, ["SweptCurve", "Position", "ExtrudedDirection", "Depth"];
    IfcSurfaceOfRevolution = "IFCSURFACEOFREVOLUTION", Geometry, ["SweptCurve", "Position", "AxisPosition"];
    IfcBSplineSurfaceWithKnots = "IFCBSPLINESURFACEWITHKNOTS", Geometry, ["UDegree", "VDegree", "ControlPointsList", "SurfaceForm", "UClosed", "VClosed", "SelfIntersect", "UMultiplicities", "VMultiplicities", "UKnots", "VKnots", "KnotSpec"];
    IfcRationalBSplineSurfaceWithKnots = "IFCRATIONALBSPLINESURFACEWITHKNOTS", Geometry, ["UDegree", "VDegree", "ControlPointsList", "SurfaceForm", "UClosed", "VClosed", "SelfIntersect", "UMultiplicities", "VMultiplicities", "UKnots", "VKnots", "KnotSpec", "WeightsData"];
    IfcHalfSpaceSolid = "IFCHALFSPACESOLID", Geometry, ["BaseSurface", "AgreementFlag"];
    IfcPolygonalBoundedHalfSpace = "IFCPOLYGONALBOUNDEDHALFSPACE", Geometry, ["BaseSurface", "AgreementFlag", "Position", "PolygonalBoundary"];
    IfcBooleanResult = "IFCBOOLEANRESULT", Geometry, ["Operator", "FirstOperand", "SecondOperand"];
    IfcBooleanClippingResult = "IFCBOOLEANCLIPPINGRESULT", Geometry, ["Operator", "FirstOperand", "SecondOperand"];
    IfcBoxedHalfSpace = "IFCBOXEDHALFSPACE", Geometry, ["BaseSurface", "AgreementFlag", "Enclosure"];
    IfcTriangulatedFaceSet = "IFCTRIANGULATEDFACESET", Geometry, ["Coordinates", "Normals", "Closed", "CoordIndex", "PnIndex"];
    IfcPolygonalFaceSet = "IFCPOLYGONALFACESET", Geometry, ["Coordinates", "Closed", "Faces", "PnIndex"];
    IfcIndexedPolygonalFace = "IFCINDEXEDPOLYGONALFACE", Geometry, ["CoordIndex"];
    IfcIndexedPolygonalFaceWithVoids = "IFCINDEXEDPOLYGONALFACEWITHVOIDS", Geometry, ["CoordIndex", "InnerCoordIndices"];

    // Styling
    IfcStyledItem = "IFCSTYLEDITEM", Geometry, ["Item", "Styles", "Name"];
    IfcPresentationStyleAssignment = "IFCPRESENTATIONSTYLEASSIGNMENT", Geometry, ["Styles"];
    IfcSurfaceStyle = "IFCSURFACESTYLE", Geometry, ["Name", "Side", "Styles"];
    IfcSurfaceStyleRendering = "IFCSURFACESTYLERENDERING", Geometry, ["SurfaceColour", "Transparency", "DiffuseColour", "TransmissionColour", "DiffuseTransmissionColour", "ReflectionColour", "SpecularColour", "SpecularHighlight", "ReflectanceMethod"];
    IfcSurfaceStyleShading = "IFCSURFACESTYLESHADING", Geometry, ["SurfaceColour", "Transparency"];
    IfcCurveStyle = "IFCCURVESTYLE", Geometry, ["Name", "CurveFont", "CurveWidth", "CurveColour", "ModelOrDraughting"];
    IfcColourRgb = "IFCCOLOURRGB", Geometry, ["Name", "Red", "Green", "Blue"];
}

/// Geometry keywords without an entry in the schema table
///
/// Unknown kinds carry no [`SchemaKind`], so the geometry-type set is
/// completed from this list. Kept sorted.
const UNLISTED_GEOMETRY: &[&str] = &[
    "IFCAXIS2PLACEMENTLINEAR",
    "IFCBOUNDARYCURVE",
    "IFCBSPLINECURVE",
    "IFCBSPLINESURFACE",
    "IFCCARTESIANTRANSFORMATIONOPERATOR2DNONUNIFORM",
    "IFCCLOTHOID",
    "IFCCOMPOSITECURVEONSURFACE",
    "IFCCONICALSURFACE",
    "IFCCOSINESPIRAL",
    "IFCCURVEBOUNDEDSURFACE",
    "IFCCURVESEGMENT",
    "IFCDIRECTRIXCURVESWEPTAREASOLID",
    "IFCDIRECTRIXDERIVEDREFERENCESWEPTAREASOLID",
    "IFCEDGE",
    "IFCEXTRUDEDAREASOLIDTAPERED2",
    "IFCGRADIENTCURVE",
    "IFCINTERSECTIONCURVE",
    "IFCLINEARPLACEMENT",
    "IFCMIRROREDPROFILEDEF",
    "IFCOFFSETCURVEBYDISTANCES",
    "IFCOPENCROSSPROFILEDEF",
    "IFCOUTERBOUNDARYCURVE",
    "IFCPATH",
    "IFCPLANARBOX",
    "IFCPOINTBYDISTANCEEXPRESSION",
    "IFCPOINTONCURVE",
    "IFCPOINTONSURFACE",
    "IFCPOLYGONALFACESETWITHVOIDS",
    "IFCPOLYNOMIALCURVE",
    "IFCRATIONALBSPLINESURFACE",
    "IFCRECTANGULARTRIMMEDSURFACE",
    "IFCSEAMCURVE",
    "IFCSECONDORDERPOLYNOMIALSPIRAL",
    "IFCSECTIONEDSOLID",
    "IFCSECTIONEDSOLIDHORIZONTAL",
    "IFCSECTIONEDSPINE",
    "IFCSECTIONEDSURFACE",
    "IFCSEGMENTEDREFERENCECURVE",
    "IFCSINESPIRAL",
    "IFCSPHERICALSURFACE",
    "IFCSUBEDGE",
    "IFCSURFACECURVE",
    "IFCSWEPTDISKSOLIDPOLYGONAL2",
    "IFCTOROIDALSURFACE",
    "IFCTRIANGULATEDIRREGULARNETWORK",
    "IFCVERTEX",
    "IFCVERTEXLOOP",
];

impl IfcType {
    /// Whether this kind belongs to the geometry-type set excluded from
    /// extraction by default
    pub fn is_geometry(&self) -> bool {
        match self.kind() {
            Some(kind) => kind == SchemaKind::Geometry,
            None => UNLISTED_GEOMETRY
                .binary_search(&self.keyword())
                .is_ok(),
        }
    }

    /// Name of the attribute at `index`
    ///
    /// Falls back to `Attribute{index}` for unknown kinds and for attributes
    /// past the declared list (e.g. IFC4X3 additions).
    pub fn attribute_name(&self, index: usize) -> std::borrow::Cow<'static, str> {
        match self.attribute_names().get(index) {
            Some(name) => std::borrow::Cow::Borrowed(name),
            None => std::borrow::Cow::Owned(format!("Attribute{index}")),
        }
    }
}

impl FromStr for IfcType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(IfcType::parse(s))
    }
}

impl Default for IfcType {
    fn default() -> Self {
        IfcType::Unknown(String::new())
    }
}

impl fmt::Display for IfcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl Serialize for IfcType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.class_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keyword() {
        assert_eq!(IfcType::parse("IFCWALL"), IfcType::IfcWall);
        assert_eq!(IfcType::parse("IfcWall"), IfcType::IfcWall);
        assert_eq!(IfcType::IfcWall.class_name(), "IfcWall");
        assert_eq!(IfcType::IfcSIUnit.keyword(), "IFCSIUNIT");
        assert_eq!(IfcType::IfcSIUnit.class_name(), "IfcSIUnit");
    }

    #[test]
    fn test_unknown_keyword() {
        let ty = IfcType::parse("IfcFlowSegment");
        assert_eq!(ty, IfcType::Unknown("IFCFLOWSEGMENT".to_string()));
        assert_eq!(ty.class_name(), "IFCFLOWSEGMENT");
        assert_eq!(ty.kind(), None);
        assert!(!ty.is_geometry());
        assert_eq!(ty.attribute_name(1), "Attribute1");
    }

    #[test]
    fn test_keyword_round_trip_for_every_kind() {
        for ty in IfcType::known() {
            assert_eq!(&IfcType::parse(ty.keyword()), ty);
            assert_eq!(ty.class_name().to_ascii_uppercase(), ty.keyword());
            assert!(!ty.attribute_names().is_empty(), "{ty} has no attributes");
        }
    }

    #[test]
    fn test_geometry_classification() {
        assert!(IfcType::IfcCartesianPoint.is_geometry());
        assert!(IfcType::IfcExtrudedAreaSolid.is_geometry());
        assert!(IfcType::IfcShapeRepresentation.is_geometry());
        assert!(!IfcType::IfcWall.is_geometry());
        assert!(!IfcType::IfcProject.is_geometry());
        assert!(!IfcType::IfcPropertySet.is_geometry());
    }

    #[test]
    fn test_exported_geometry_keywords_are_geometry() {
        for keyword in [
            "IFCREVOLVEDAREASOLID",
            "IFCEDGELOOP",
            "IFCORIENTEDEDGE",
            "IFCEDGECURVE",
            "IFCVERTEXPOINT",
            "IFCELLIPSE",
            "IFCBSPLINECURVEWITHKNOTS",
            "IFCAXIS1PLACEMENT",
            "IFCLSHAPEPROFILEDEF",
            "IFCTSHAPEPROFILEDEF",
            "IFCUSHAPEPROFILEDEF",
            "IFCCSHAPEPROFILEDEF",
            "IFCCARTESIANPOINTLIST2D",
            "IFCINDEXEDPOLYCURVE",
            "IFCSHELLBASEDSURFACEMODEL",
            "IFCADVANCEDBREP",
            "IFCADVANCEDFACE",
            "IFCBLOCK",
        ] {
            let ty = IfcType::parse(keyword);
            assert_eq!(ty.kind(), Some(SchemaKind::Geometry), "{keyword}");
            assert!(ty.is_geometry(), "{keyword}");
        }
    }

    #[test]
    fn test_unlisted_geometry_keywords() {
        for keyword in ["IFCCLOTHOID", "IfcSectionedSolidHorizontal", "IFCVERTEX"] {
            let ty = IfcType::parse(keyword);
            assert_eq!(ty.kind(), None);
            assert!(ty.is_geometry(), "{keyword}");
        }
        assert!(!IfcType::parse("IFCFLOWSEGMENT").is_geometry());
    }

    #[test]
    fn test_unlisted_geometry_is_sorted_and_unmodelled() {
        assert!(UNLISTED_GEOMETRY.windows(2).all(|w| w[0] < w[1]));
        for keyword in UNLISTED_GEOMETRY {
            assert_eq!(IfcType::parse(keyword), IfcType::Unknown(keyword.to_string()));
        }
    }

    #[test]
    fn test_attribute_names() {
        assert_eq!(IfcType::IfcWall.attribute_name(2), "Name");
        assert_eq!(IfcType::IfcBuildingStorey.attribute_name(9), "Elevation");
        assert_eq!(IfcType::IfcWall.attribute_name(9), "Attribute9");
    }
}
